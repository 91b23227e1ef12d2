/// Day sources: where `newday` notifications come from
mod clock;
mod replay;

// Re-export public types and functions
pub use clock::{ClockDaySource, ScheduleError, next_tick, parse_schedule};
pub use replay::replay;
