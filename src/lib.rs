//! Emits a `birthday` notification for every roster entry that falls on
//! each `newday` signal from an injected day source.

pub mod config;
pub mod constants;
pub mod events;
pub mod models;
pub mod notifier;
pub mod roster;
pub mod schedule;
pub mod utils;

pub use events::{Emitter, Handler, Subscribe};
pub use models::{Birthday, BirthdayEvent, DateCode, DateCodeError, NewDay, Roster};
pub use notifier::{BirthdayNotifier, NotifierConfig};
