use chrono::{Datelike, Utc};
use tracing::{error, info, warn};

use birthday_notifier::{
    BirthdayNotifier, Emitter, NewDay, NotifierConfig, Roster,
    config::Config,
    constants::LOG_DIRECTIVE,
    roster::load_roster,
    schedule::{ClockDaySource, replay},
    utils::message_formatter::build_birthday_message,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let birthdays = match load_roster(&config.birthdays_file) {
        Ok(birthdays) => birthdays,
        Err(e) => {
            error!(
                "Failed to load birthdays from {}: {}",
                config.birthdays_file.display(),
                e
            );
            std::process::exit(1);
        }
    };

    // Date codes on the command line are replayed instead of following the clock
    let codes: Vec<String> = std::env::args().skip(1).collect();

    if codes.is_empty() {
        run_clock(&config, birthdays).await;
    } else {
        run_replay(&config, birthdays, codes);
    }
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Log a greeting for every birthday the notifier emits
fn attach_greeter(notifier: &BirthdayNotifier, config: &Config) {
    let timezone = config.timezone;
    let template = config.message_template.clone();

    notifier.on_birthday(move |event| {
        let current_year = Utc::now().with_timezone(&timezone).year();
        let message =
            build_birthday_message(event.birthday(), current_year, template.as_deref());
        info!("{}", message);
    });
}

/// Replay the given date codes through a fresh notifier, then exit
fn run_replay(config: &Config, birthdays: Roster, codes: Vec<String>) {
    let days: Emitter<NewDay> = Emitter::new();
    let notifier = BirthdayNotifier::new(NotifierConfig {
        birthdays,
        day_emitter: &days,
    });
    attach_greeter(&notifier, config);

    let sent = replay(&days, codes);
    info!("Replayed {} day(s)", sent);
}

/// Follow the wall clock until Ctrl-C
async fn run_clock(config: &Config, birthdays: Roster) {
    let clock = ClockDaySource::new(config.timezone);
    let notifier = BirthdayNotifier::new(NotifierConfig {
        birthdays,
        day_emitter: &clock,
    });
    attach_greeter(&notifier, config);

    // Catch up on today before waiting for the next tick
    clock.emit_today();

    let mut task = match clock.start(&config.notify_cron) {
        Ok(task) => task,
        Err(e) => {
            error!("Failed to start clock: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Watching {} birthday(s) in timezone {}",
        notifier.roster().len(),
        clock.timezone()
    );

    tokio::select! {
        result = &mut task => {
            match result {
                Ok(()) => error!("Clock day source stopped; no more day signals will arrive"),
                Err(e) => error!("Clock day source failed: {}", e),
            }
            std::process::exit(1);
        }
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
        }
    }

    task.abort();
    info!("Shutting down");
}
