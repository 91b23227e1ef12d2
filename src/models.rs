use std::fmt;
use std::sync::Arc;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::DATE_CODE_LEN;

/// A birthday record: month and day plus whatever else the data file carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Birthday {
    pub month: i32,
    pub day: i32,
    /// Remaining fields of the record, kept as-is
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Birthday {
    /// Create a record with an empty payload
    pub fn new(month: i32, day: i32) -> Self {
        Self {
            month,
            day,
            details: Map::new(),
        }
    }

    /// Attach a payload field
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// The `name` payload field, if present and a string
    pub fn name(&self) -> Option<&str> {
        self.details.get("name").and_then(Value::as_str)
    }

    /// The `year` payload field, if present and an integer
    pub fn year(&self) -> Option<i32> {
        self.details
            .get("year")
            .and_then(Value::as_i64)
            .and_then(|year| i32::try_from(year).ok())
    }

    /// Check whether this record falls on the given date code
    pub fn falls_on(&self, date: DateCode) -> bool {
        self.month == date.month && self.day == date.day
    }
}

/// The fixed birthday collection, shared read-only
pub type Roster = Arc<[Birthday]>;

/// Day signal: a calendar day has started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDay {
    /// `MM-DD` date code
    pub mm_dd: String,
}

impl NewDay {
    pub fn new(mm_dd: impl Into<String>) -> Self {
        Self {
            mm_dd: mm_dd.into(),
        }
    }

    /// Day signal for a calendar date
    pub fn for_date(date: impl Datelike) -> Self {
        Self::new(DateCode::from_date(date).to_string())
    }
}

/// Errors produced when reading a `MM-DD` date code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateCodeError {
    #[error("date code {code:?} is shorter than 5 characters")]
    TooShort { code: String },
    #[error("date code {code:?} has a non-digit at position {position}")]
    NotADigit { code: String, position: usize },
}

/// Month and day read from a `MM-DD` date code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCode {
    pub month: i32,
    pub day: i32,
}

impl DateCode {
    pub fn new(month: i32, day: i32) -> Self {
        Self { month, day }
    }

    /// Read month from positions 0-1 and day from positions 3-4.
    ///
    /// Position 2 is a separator and is not checked. Characters past
    /// position 4 are ignored. Values are not range-checked: `"13-40"`
    /// parses, it simply never matches a birthday.
    pub fn parse(code: &str) -> Result<Self, DateCodeError> {
        let chars: Vec<char> = code.chars().take(DATE_CODE_LEN).collect();
        if chars.len() < DATE_CODE_LEN {
            return Err(DateCodeError::TooShort {
                code: code.to_string(),
            });
        }

        let digit = |position: usize| {
            chars[position]
                .to_digit(10)
                .map(|d| d as i32)
                .ok_or_else(|| DateCodeError::NotADigit {
                    code: code.to_string(),
                    position,
                })
        };

        Ok(Self {
            month: digit(0)? * 10 + digit(1)?,
            day: digit(3)? * 10 + digit(4)?,
        })
    }

    /// Date code for a calendar date
    pub fn from_date(date: impl Datelike) -> Self {
        Self {
            month: date.month() as i32,
            day: date.day() as i32,
        }
    }
}

impl fmt::Display for DateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl std::str::FromStr for DateCode {
    type Err = DateCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Birthday notification: points at the matched record inside the roster
#[derive(Debug, Clone)]
pub struct BirthdayEvent {
    roster: Roster,
    index: usize,
}

impl BirthdayEvent {
    pub(crate) fn new(roster: Roster, index: usize) -> Self {
        Self { roster, index }
    }

    /// The matched birthday record
    pub fn birthday(&self) -> &Birthday {
        &self.roster[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_parse_date_code() {
        assert_eq!(DateCode::parse("03-15"), Ok(DateCode::new(3, 15)));
        assert_eq!(DateCode::parse("12-31"), Ok(DateCode::new(12, 31)));
        // Separator is not checked
        assert_eq!(DateCode::parse("01/02"), Ok(DateCode::new(1, 2)));
        // Trailing characters are ignored
        assert_eq!(DateCode::parse("07-04T00:00"), Ok(DateCode::new(7, 4)));
        // Range is not checked
        assert_eq!(DateCode::parse("13-40"), Ok(DateCode::new(13, 40)));
    }

    #[test]
    fn test_parse_date_code_too_short() {
        assert!(matches!(
            DateCode::parse("3-15"),
            Err(DateCodeError::TooShort { .. })
        ));
        assert!(matches!(
            DateCode::parse(""),
            Err(DateCodeError::TooShort { .. })
        ));
    }

    #[test]
    fn test_parse_date_code_non_numeric() {
        assert_eq!(
            DateCode::parse("ab-cd"),
            Err(DateCodeError::NotADigit {
                code: "ab-cd".to_string(),
                position: 0
            })
        );
        assert!(matches!(
            DateCode::parse("03-1x"),
            Err(DateCodeError::NotADigit { position: 4, .. })
        ));
        // Partly numeric months are rejected, not read as month 3
        assert!(matches!(
            DateCode::parse("3a-15"),
            Err(DateCodeError::NotADigit { position: 1, .. })
        ));
        assert!(matches!(
            DateCode::parse(" 3-15"),
            Err(DateCodeError::NotADigit { position: 0, .. })
        ));
    }

    #[test]
    fn test_date_code_display() {
        assert_eq!(DateCode::new(3, 5).to_string(), "03-05");
        assert_eq!(DateCode::new(12, 25).to_string(), "12-25");
    }

    #[test]
    fn test_new_day_for_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(NewDay::for_date(date).mm_dd, "02-09");
    }

    #[test]
    fn test_birthday_payload_accessors() {
        let birthday: Birthday = serde_json::from_value(json!({
            "month": 3,
            "day": 15,
            "name": "Alice",
            "year": 1990,
            "email": "alice@example.com"
        }))
        .unwrap();

        assert_eq!(birthday.name(), Some("Alice"));
        assert_eq!(birthday.year(), Some(1990));
        assert_eq!(birthday.details.len(), 3);
        assert!(birthday.falls_on(DateCode::new(3, 15)));
        assert!(!birthday.falls_on(DateCode::new(3, 16)));
    }

    #[test]
    fn test_birthday_without_payload() {
        let birthday = Birthday::new(1, 1);
        assert_eq!(birthday.name(), None);
        assert_eq!(birthday.year(), None);
    }
}
