use super::load_dataset;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, success};

/// Handle `check`: report every dataset issue, fail if there is any.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let data = load_dataset(cli, cfg)?;
    let issues = data.validate();

    if issues.is_empty() {
        success(format!(
            "Dataset {} is valid: {} months, {} events",
            data.year,
            data.months.len(),
            data.event_count()
        ));
        return Ok(());
    }

    header(format!("{} issue(s) found", issues.len()));
    for issue in &issues {
        error(issue);
    }

    Err(AppError::InvalidDataset(format!(
        "{} issue(s) in dataset {}",
        issues.len(),
        data.year
    )))
}
