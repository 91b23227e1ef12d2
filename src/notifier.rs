/// Birthday notifier - turns day signals into birthday notifications
use std::sync::Arc;

use tracing::{debug, warn};

use crate::events::{Emitter, Handler, Subscribe};
use crate::models::{Birthday, BirthdayEvent, DateCode, NewDay, Roster};

/// Everything a notifier needs at construction
pub struct NotifierConfig<'a, D: Subscribe<NewDay> + ?Sized> {
    /// Birthday collection, shared with the caller
    pub birthdays: Roster,
    /// Source of `newday` notifications
    pub day_emitter: &'a D,
}

/// Emits a [`BirthdayEvent`] for every roster entry matching each new day.
///
/// The subscription to the day source is made once, in [`BirthdayNotifier::new`],
/// and lasts as long as the day source keeps its handlers.
pub struct BirthdayNotifier {
    birthdays: Roster,
    emitter: Arc<Emitter<BirthdayEvent>>,
}

impl BirthdayNotifier {
    /// Create a notifier and subscribe it to the day source
    pub fn new<D: Subscribe<NewDay> + ?Sized>(config: NotifierConfig<'_, D>) -> Self {
        let NotifierConfig {
            birthdays,
            day_emitter,
        } = config;

        let emitter = Arc::new(Emitter::new());

        let roster = Arc::clone(&birthdays);
        let outbound = Arc::clone(&emitter);
        let handler: Handler<NewDay> =
            Arc::new(move |new_day: &NewDay| handle_new_day(&roster, &outbound, new_day));
        day_emitter.subscribe(handler);

        Self { birthdays, emitter }
    }

    /// Register a handler for `birthday` notifications
    pub fn on_birthday<F>(&self, handler: F)
    where
        F: Fn(&BirthdayEvent) + Send + Sync + 'static,
    {
        self.emitter.on(handler);
    }

    /// All roster entries falling on the given date, in roster order
    pub fn birthdays_on(&self, date: DateCode) -> impl Iterator<Item = &Birthday> + '_ {
        self.birthdays.iter().filter(move |b| b.falls_on(date))
    }

    /// The birthday collection this notifier reads
    pub fn roster(&self) -> &Roster {
        &self.birthdays
    }
}

impl Subscribe<BirthdayEvent> for BirthdayNotifier {
    fn subscribe(&self, handler: Handler<BirthdayEvent>) {
        self.emitter.subscribe(handler);
    }
}

fn handle_new_day(roster: &Roster, emitter: &Emitter<BirthdayEvent>, new_day: &NewDay) {
    let date = match DateCode::parse(&new_day.mm_dd) {
        Ok(date) => date,
        Err(e) => {
            warn!("Ignoring malformed day signal: {}", e);
            return;
        }
    };

    let matches: Vec<usize> = roster
        .iter()
        .enumerate()
        .filter(|(_, birthday)| birthday.falls_on(date))
        .map(|(index, _)| index)
        .collect();

    debug!("{} birthday(s) on {}", matches.len(), date);

    for index in matches {
        emitter.emit(&BirthdayEvent::new(Arc::clone(roster), index));
    }
}
