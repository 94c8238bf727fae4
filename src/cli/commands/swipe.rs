use crate::cli::parser::{Cli, Commands};
use crate::errors::AppResult;
use crate::view::nav::{Swipe, classify_swipe};

/// Handle `swipe <id> --dx --dy`: print where the gesture leads.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Swipe { id, dx, dy } = &cli.command {
        let swipe = Swipe::new(*dx, *dy);
        match classify_swipe(swipe, *id) {
            Some(target) => {
                log::debug!("swipe {swipe:?} on month {id} -> {target}");
                println!("{target}");
            }
            None => println!("No navigation"),
        }
    }
    Ok(())
}
