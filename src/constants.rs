/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "birthday_notifier=info";

/// Default cron expression for the daily tick (midnight)
pub const DEFAULT_NOTIFY_CRON: &str = "0 0 0 * * *";

/// Default timezone used to decide which calendar day it is
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Length of a `MM-DD` date code, in characters
pub const DATE_CODE_LEN: usize = 5;
