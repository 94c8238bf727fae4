// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::models::Dataset;
use crate::ui::messages::warning;
use crate::view::builder::event_rows;
use std::path::Path;

/// High-level logic behind the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Records for one month, in event-list order (date ascending, ties
    /// in input order).
    pub fn collect(data: &Dataset, month_id: u32) -> AppResult<Vec<EventExport>> {
        let month = data
            .month(month_id)
            .ok_or(AppError::MonthNotFound(month_id))?;
        Ok(event_rows(month).iter().map(EventExport::from).collect())
    }

    /// Export a month's event list.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `force`: overwrite without asking
    pub fn export(
        data: &Dataset,
        month_id: u32,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let events = Self::collect(data, month_id)?;
        if events.is_empty() {
            warning(format!("No events in month {month_id}, nothing to export."));
            return Ok(());
        }

        ensure_writable(path, force)?;

        log::debug!(
            "exporting {} events of month {month_id} as {}",
            events.len(),
            format.as_str()
        );

        match format {
            ExportFormat::Csv => export_csv(&events, path),
            ExportFormat::Json => export_json(&events, path),
        }
    }
}
