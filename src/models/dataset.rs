use super::month::Month;
use crate::errors::{AppError, AppResult};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// A whole year of months, as read from `events.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub year: i32,
    #[serde(default)]
    pub months: Vec<Month>,
}

/// One invariant violation found by [`Dataset::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    MonthOutOfRange { id: u32 },
    DuplicateMonth { id: u32 },
    MalformedDate { month: u32, index: usize, raw: String },
    MisplacedEvent { month: u32, index: usize, raw: String },
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetIssue::MonthOutOfRange { id } => {
                write!(f, "month id {id} is outside 1..=12")
            }
            DatasetIssue::DuplicateMonth { id } => write!(f, "month id {id} appears more than once"),
            DatasetIssue::MalformedDate { month, index, raw } => {
                write!(f, "month {month}, event #{index}: malformed date '{raw}'")
            }
            DatasetIssue::MisplacedEvent { month, index, raw } => write!(
                f,
                "month {month}, event #{index}: date '{raw}' does not belong to this month"
            ),
        }
    }
}

impl Dataset {
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::InvalidDataset(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }

    pub fn month(&self, id: u32) -> Option<&Month> {
        self.months.iter().find(|m| m.id == id)
    }

    /// Collect every invariant violation instead of stopping at the first.
    pub fn validate(&self) -> Vec<DatasetIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for month in &self.months {
            if !(1..=12).contains(&month.id) {
                issues.push(DatasetIssue::MonthOutOfRange { id: month.id });
            }
            if !seen.insert(month.id) {
                issues.push(DatasetIssue::DuplicateMonth { id: month.id });
            }

            for (index, ev) in month.events.iter().enumerate() {
                match ev.parsed_date() {
                    Err(_) => issues.push(DatasetIssue::MalformedDate {
                        month: month.id,
                        index,
                        raw: ev.date.clone(),
                    }),
                    Ok(d) if d.year() != self.year || d.month() != month.id => {
                        issues.push(DatasetIssue::MisplacedEvent {
                            month: month.id,
                            index,
                            raw: ev.date.clone(),
                        })
                    }
                    Ok(_) => {}
                }
            }
        }

        issues
    }

    pub fn event_count(&self) -> usize {
        self.months.iter().map(|m| m.events.len()).sum()
    }
}
