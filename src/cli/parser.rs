use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for calendario
#[derive(Parser, Debug)]
#[command(
    name = "calendario",
    version = env!("CARGO_PKG_VERSION"),
    about = "A yearly event calendar: month grids with per-day events, read from a JSON data file",
    long_about = None
)]
pub struct Cli {
    /// Override the data file (default: `data_file` from the config)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Print the page as JSON instead of text
    #[arg(global = true, long = "json")]
    pub json: bool,

    /// Disable ANSI colors
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the year view: every month as a small grid
    Year,

    /// Show one month: big grid, event list and navigation
    Month {
        /// Month number (1-12)
        id: u32,
    },

    /// Route a fragment such as "#year" or "#month/3" and show the result
    Show {
        /// Fragment identifier (the leading '#' is optional)
        #[arg(allow_hyphen_values = true)]
        fragment: String,
    },

    /// Resolve a touch swipe on a month page into the next fragment
    Swipe {
        /// Month currently on screen
        id: u32,

        /// Horizontal travel in px (positive = right)
        #[arg(long, allow_hyphen_values = true)]
        dx: f64,

        /// Vertical travel in px
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        dy: f64,
    },

    /// Validate the data file (month ids, date formats, misplaced events)
    Check,

    /// Export a month's event list
    Export {
        /// Month number (1-12)
        id: u32,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
