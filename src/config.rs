use std::path::PathBuf;

use chrono_tz::Tz;

use crate::constants::{DEFAULT_NOTIFY_CRON, DEFAULT_TIMEZONE};
use crate::schedule::{ScheduleError, parse_schedule};

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the birthday roster
    pub birthdays_file: PathBuf,
    /// Cron expression for the daily tick
    pub notify_cron: String,
    /// Timezone deciding which calendar day it is
    pub timezone: Tz,
    /// Optional greeting template with `{name}`, `{date}` and `{age}` placeholders
    pub message_template: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "BIRTHDAYS_FILE environment variable not set. \
         Set it with: export BIRTHDAYS_FILE=/path/to/birthdays.json"
    )]
    MissingBirthdaysFile,
    #[error("TIMEZONE '{0}' is not a known IANA timezone")]
    InvalidTimezone(String),
    #[error(transparent)]
    InvalidCron(#[from] ScheduleError),
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let birthdays_file = lookup("BIRTHDAYS_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingBirthdaysFile)?;

        let notify_cron =
            lookup("NOTIFY_CRON").unwrap_or_else(|| DEFAULT_NOTIFY_CRON.to_string());
        parse_schedule(&notify_cron)?;

        let timezone_name = lookup("TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let timezone = timezone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(timezone_name.clone()))?;

        let message_template = lookup("BIRTHDAY_MESSAGE").filter(|t| !t.trim().is_empty());

        Ok(Self {
            birthdays_file,
            notify_cron,
            timezone,
            message_template,
        })
    }
}
