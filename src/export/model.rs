// src/export/model.rs

use crate::view::builder::EventRow;
use serde::Serialize;

/// Flat record written by the CSV / JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub date: String,
    pub label: String,
    pub title: String,
    pub tag: String,
    pub kind: String,
}

impl From<&EventRow> for EventExport {
    fn from(row: &EventRow) -> Self {
        Self {
            date: row.date.clone(),
            label: row.date_label.clone(),
            title: row.title.clone(),
            tag: row.tag.clone(),
            kind: row.kind.as_str().to_string(),
        }
    }
}
