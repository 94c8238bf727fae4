pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod swipe;
pub mod view;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::render::{TextOptions, json::render_json, render_page};
use crate::view::Page;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Data file to read: `--data` wins over the configured one.
pub(crate) fn data_path(cli: &Cli, cfg: &Config) -> PathBuf {
    PathBuf::from(cli.data.as_deref().unwrap_or(&cfg.data_file))
}

/// Load the dataset once for a command.
pub(crate) fn load_dataset(cli: &Cli, cfg: &Config) -> AppResult<Dataset> {
    let path = data_path(cli, cfg);
    log::info!("loading dataset from {}", path.display());

    let data = Dataset::load(&path)?;
    log::debug!(
        "dataset {}: {} months, {} events",
        data.year,
        data.months.len(),
        data.event_count()
    );
    Ok(data)
}

pub(crate) fn text_options(cli: &Cli, cfg: &Config) -> TextOptions {
    TextOptions {
        color: cfg.color && !cli.no_color && !cli.json && std::io::stdout().is_terminal(),
    }
}

/// Print a page in the format selected on the command line.
pub(crate) fn print_page(cli: &Cli, cfg: &Config, page: &Page) -> AppResult<()> {
    if cli.json {
        println!("{}", render_json(page)?);
    } else {
        print!("{}", render_page(page, text_options(cli, cfg)));
    }
    Ok(())
}
