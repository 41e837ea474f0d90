use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkTime
#[derive(Parser)]
#[command(
    name = "rworktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn access-control badge logs into monthly attendance records",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, edit, default shift)
    Config {
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,

        /// Default shift start (HH:MM), used when the IN punch is missing
        #[arg(long = "start", value_name = "HH:MM")]
        start: Option<String>,

        /// Default shift end (HH:MM), used when the OUT punch is missing
        #[arg(long = "end", value_name = "HH:MM")]
        end: Option<String>,
    },

    /// Import a tab-separated access-control log (replaces stored punches)
    Import {
        /// Log file (.csv, .tsv, .txt, .dat)
        file: String,
    },

    /// Generate monthly records from the imported punches
    Generate {
        /// Target month (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,

        /// Replace existing records for the month without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Override the default shift start for this run (HH:MM)
        #[arg(long = "start", value_name = "HH:MM")]
        start: Option<String>,

        /// Override the default shift end for this run (HH:MM)
        #[arg(long = "end", value_name = "HH:MM")]
        end: Option<String>,
    },

    /// Show the records of a month as printable per-employee tables
    List {
        /// Month (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,

        /// Show only this employee
        #[arg(long, short)]
        employee: Option<String>,
    },

    /// Manually correct the arrival and/or departure of one day
    Edit {
        /// Employee ID
        employee: String,

        /// Date (YYYY-MM-DD)
        date: String,

        /// New arrival time (HH:MM)
        #[arg(long = "in", value_name = "HH:MM", conflicts_with = "clear_in")]
        arrival: Option<String>,

        /// New departure time (HH:MM)
        #[arg(long = "out", value_name = "HH:MM", conflicts_with = "clear_out")]
        departure: Option<String>,

        /// Remove the arrival time
        #[arg(long = "clear-in")]
        clear_in: bool,

        /// Remove the departure time
        #[arg(long = "clear-out")]
        clear_out: bool,
    },

    /// Set the display name of an employee
    Name {
        /// Employee ID
        employee: String,

        /// Display name
        name: String,
    },

    /// Export the records of a month
    Export {
        /// Month (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,

        /// Export format (guessed from the file extension when omitted)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
