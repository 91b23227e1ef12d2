/// Loading the birthday roster from a JSON data file
use std::path::Path;

use tracing::{info, warn};

use crate::models::{Birthday, Roster};
use crate::utils::datetime::{format_date_display, is_valid_date};

/// Errors raised while loading a roster
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read birthdays file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid birthdays JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("birthday #{index} has out-of-range date (month {month}, day {day})")]
    InvalidDate { index: usize, month: i32, day: i32 },
}

/// Load a roster from a JSON file containing an array of birthday records
pub fn load_roster(path: impl AsRef<Path>) -> Result<Roster, RosterError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let roster = parse_roster(&contents)?;

    info!("Loaded {} birthday(s) from {}", roster.len(), path.display());

    Ok(roster)
}

/// Parse a roster from a JSON array of birthday records
pub fn parse_roster(json: &str) -> Result<Roster, RosterError> {
    let birthdays: Vec<Birthday> = serde_json::from_str(json)?;

    for (index, birthday) in birthdays.iter().enumerate() {
        validate_record(index, birthday)?;
    }

    Ok(birthdays.into())
}

fn validate_record(index: usize, birthday: &Birthday) -> Result<(), RosterError> {
    let (month, day) = (birthday.month, birthday.day);

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(RosterError::InvalidDate { index, month, day });
    }

    if !is_valid_date(month, day) {
        warn!(
            "Birthday #{} falls on {}, which never occurs; it will never match",
            index,
            format_date_display(month, day)
        );
    }

    Ok(())
}
