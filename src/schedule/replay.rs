use tracing::debug;

use crate::events::Emitter;
use crate::models::NewDay;

/// Emit a day signal for each date code, in order. Returns the number of signals sent.
pub fn replay<I, S>(emitter: &Emitter<NewDay>, codes: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut sent = 0;
    for code in codes {
        let day = NewDay::new(code);
        debug!("Replaying day {}", day.mm_dd);
        emitter.emit(&day);
        sent += 1;
    }
    sent
}
