use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, warn};

use crate::events::{Emitter, Handler, Subscribe};
use crate::models::NewDay;

/// Errors raised while setting up the clock
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("invalid cron expression '{expression}': {reason}")]
    InvalidCron { expression: String, reason: String },
    #[error("cron expression '{expression}' never fires")]
    NeverFires { expression: String },
}

/// Parse a six-field cron expression that has at least one upcoming occurrence
pub fn parse_schedule(expression: &str) -> Result<cron::Schedule, ScheduleError> {
    let schedule =
        cron::Schedule::from_str(expression).map_err(|e| ScheduleError::InvalidCron {
            expression: expression.to_string(),
            reason: e.to_string(),
        })?;

    if next_tick(&schedule, &Utc::now()).is_none() {
        return Err(ScheduleError::NeverFires {
            expression: expression.to_string(),
        });
    }

    Ok(schedule)
}

/// First occurrence of the schedule strictly after `after`
pub fn next_tick<Z: TimeZone>(
    schedule: &cron::Schedule,
    after: &DateTime<Z>,
) -> Option<DateTime<Z>> {
    schedule.after(after).next()
}

/// Emits at most one day signal per local date
struct DailyEmitter {
    emitter: Emitter<NewDay>,
    last_date: Mutex<Option<NaiveDate>>,
}

impl DailyEmitter {
    /// Emit for `date` unless that date (or a later one) was already emitted
    fn emit_for(&self, date: NaiveDate) -> Option<usize> {
        {
            let mut last_date = match self.last_date.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if last_date.is_some_and(|last| last >= date) {
                debug!("Day signal for {} already sent, skipping", date);
                return None;
            }
            *last_date = Some(date);
        }

        Some(self.emitter.emit(&NewDay::for_date(date)))
    }
}

/// Wall-clock day source: emits `newday` on cron ticks, dated in its timezone.
///
/// Each local date is signalled at most once, whether through
/// [`ClockDaySource::emit_today`] or a tick of the running task.
pub struct ClockDaySource {
    daily: Arc<DailyEmitter>,
    timezone: Tz,
}

impl ClockDaySource {
    pub fn new(timezone: Tz) -> Self {
        Self {
            daily: Arc::new(DailyEmitter {
                emitter: Emitter::new(),
                last_date: Mutex::new(None),
            }),
            timezone,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Emit a day signal for the current local date.
    ///
    /// Returns how many handlers ran, or `None` if today was already signalled.
    pub fn emit_today(&self) -> Option<usize> {
        let today = Utc::now().with_timezone(&self.timezone).date_naive();
        info!("Catching up on today ({})", today);
        self.daily.emit_for(today)
    }

    /// Spawn the clock task. Fails without spawning if the expression is unusable.
    pub fn start(&self, cron_expression: &str) -> Result<JoinHandle<()>, ScheduleError> {
        let schedule = parse_schedule(cron_expression)?;
        let daily = Arc::clone(&self.daily);
        let timezone = self.timezone;
        let expression = cron_expression.to_string();

        Ok(tokio::spawn(async move {
            info!(
                "Clock day source started (cron: '{}', timezone: {})",
                expression, timezone
            );

            let mut cursor = Utc::now().with_timezone(&timezone);

            loop {
                let now = Utc::now().with_timezone(&timezone);
                // Never fire the same tick twice if sleep wakes early
                if now > cursor {
                    cursor = now;
                }

                let Some(next) = next_tick(&schedule, &cursor) else {
                    warn!("No upcoming time for cron '{}', stopping", expression);
                    break;
                };

                let wait_duration = (next.with_timezone(&Utc) - Utc::now())
                    .to_std()
                    .unwrap_or(Duration::ZERO);

                info!(
                    "Next day tick at {} (in {} minutes)",
                    next,
                    wait_duration.as_secs() / 60
                );

                sleep(wait_duration).await;

                if let Some(handlers) = daily.emit_for(next.date_naive()) {
                    info!(
                        "New day {} delivered to {} handler(s)",
                        next.date_naive(),
                        handlers
                    );
                }

                cursor = next;
            }

            info!("Clock day source stopped");
        }))
    }
}

impl Subscribe<NewDay> for ClockDaySource {
    fn subscribe(&self, handler: Handler<NewDay>) {
        self.daily.emitter.subscribe(handler);
    }
}
