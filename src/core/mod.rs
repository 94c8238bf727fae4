pub mod aggregator;
pub mod geometry;

pub use aggregator::{DayGroups, group_by_day, sort_by_date};
pub use geometry::{MonthLayout, days_in_month, first_weekday_of_month};
