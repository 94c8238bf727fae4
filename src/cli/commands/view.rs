use super::{load_dataset, print_page};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::view::{Page, View, build_page};

/// Handle `year`, `month <id>` and `show <fragment>`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let view = match &cli.command {
        Commands::Year => View::Year,
        Commands::Month { id } => View::Month(*id),
        Commands::Show { fragment } => {
            let view = View::from_fragment(fragment);
            log::debug!("fragment '{fragment}' routed to {view}");
            view
        }
        _ => return Ok(()),
    };

    let data = load_dataset(cli, cfg)?;
    let page = build_page(&data, view, cfg)?;

    match &page {
        Page::Month { grid, .. } if grid.skipped > 0 => {
            warning(format!(
                "{} event(s) with a malformed date left out of the grid (run `calendario check`)",
                grid.skipped
            ));
        }
        Page::Year { invalid_months, .. } if !invalid_months.is_empty() => {
            log::warn!("month ids outside 1..=12 skipped: {invalid_months:?}");
            warning(format!(
                "Month id(s) {invalid_months:?} outside 1..=12 left out of the year view"
            ));
        }
        _ => {}
    }

    print_page(cli, cfg, &page)
}
