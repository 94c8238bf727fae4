//! Grid geometry for a calendar month.
//!
//! Weekday indices are Sunday-anchored: 0 = Sunday, 6 = Saturday. The
//! weekday label row used by the renderer must follow the same order.
//!
//! Years are limited to the range `chrono::NaiveDate` can represent; a
//! month whose first day or following month falls outside it is reported
//! as `YearOutOfRange`.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

fn first_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(AppError::YearOutOfRange(year))
}

/// Number of days in `month` (1..=12) of the proleptic Gregorian `year`.
pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    let start = first_of_month(year, month)?;
    let end = start
        .checked_add_months(Months::new(1))
        .ok_or(AppError::YearOutOfRange(year))?;
    Ok(end.signed_duration_since(start).num_days() as u32)
}

/// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_of_month(year: i32, month: u32) -> AppResult<u32> {
    let start = first_of_month(year, month)?;
    Ok(start.weekday().num_days_from_sunday())
}

/// Cell layout of one month: blanks before day 1 plus the day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days: u32,
}

impl MonthLayout {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        Ok(Self {
            year,
            month,
            leading_blanks: first_weekday_of_month(year, month)?,
            days: days_in_month(year, month)?,
        })
    }

    /// Rows of seven cells needed to draw the month.
    pub fn rows(&self) -> u32 {
        (self.leading_blanks + self.days).div_ceil(7)
    }

    /// Zero-based cell index of `day`, or None outside 1..=days.
    fn cell_of(&self, day: u32) -> Option<u32> {
        (1..=self.days)
            .contains(&day)
            .then(|| self.leading_blanks + day - 1)
    }

    /// Column (0..=6) of `day` in the grid.
    pub fn column_of(&self, day: u32) -> Option<u32> {
        self.cell_of(day).map(|cell| cell % 7)
    }

    /// Row (0-based) of `day` in the grid.
    pub fn row_of(&self, day: u32) -> Option<u32> {
        self.cell_of(day).map(|cell| cell / 7)
    }
}
