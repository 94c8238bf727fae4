use super::tag_kind::TagKind;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed width of a `YYYY-MM-DD` date string.
pub const DATE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: String, // raw "YYYY-MM-DD", validated on access
    pub title: String,
    #[serde(default)]
    pub tag: String,
}

impl Event {
    pub fn new(date: impl Into<String>, title: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            tag: tag.into(),
        }
    }

    /// Strict parse of the raw date.
    ///
    /// Only the exact `YYYY-MM-DD` shape is accepted: 10 bytes, dashes at
    /// offsets 4 and 7, digits everywhere else, and a real Gregorian day.
    pub fn parsed_date(&self) -> AppResult<NaiveDate> {
        parse_iso_date(&self.date)
    }

    pub fn day(&self) -> AppResult<u32> {
        self.parsed_date().map(|d| d.day())
    }

    pub fn kind(&self) -> TagKind {
        TagKind::from_tag(&self.tag)
    }

    /// Two-digit day slice of the raw date ("05"), if the string is long enough.
    pub fn day_str(&self) -> Option<&str> {
        self.date.get(8..DATE_LEN)
    }

    /// Hover text used by grid cells: `"{title} ({tag})"`.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.title, self.tag)
    }
}

pub fn parse_iso_date(raw: &str) -> AppResult<NaiveDate> {
    let invalid = || AppError::InvalidDateFormat(raw.to_string());

    let bytes = raw.as_bytes();
    if bytes.len() != DATE_LEN {
        return Err(invalid());
    }

    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}
