use super::load_dataset;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        id,
        format,
        file,
        force,
    } = &cli.command
    {
        let data = load_dataset(cli, cfg)?;
        ExportLogic::export(&data, *id, *format, file, *force)?;
    }
    Ok(())
}
