//! calendario library root.
//! Exposes the calendar core (geometry, aggregation), the pure view
//! builder, renderers and the CLI `run()` entry point.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;
pub mod view;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use flexi_logger::{Logger, LoggerHandle};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Year | Commands::Month { .. } | Commands::Show { .. } => {
            cli::commands::view::handle(cli, cfg)
        }
        Commands::Swipe { .. } => cli::commands::swipe::handle(cli),
        Commands::Check => cli::commands::check::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the configured level.
fn init_logger(cfg: &Config) -> AppResult<LoggerHandle> {
    Logger::try_with_env_or_str(&cfg.log_level)
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|e| AppError::Logger(e.to_string()))
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // test mode never reads the user's config file
    let cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    let _logger = init_logger(&cfg)?;
    log::debug!("command: {:?}", cli.command);

    dispatch(&cli, &cfg)
}
