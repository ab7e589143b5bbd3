use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Time-and-attendance CLI: record punches, audit corrections, daily and monthly summaries",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use this configuration file instead of the standard one
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Record a clock event
    Punch {
        /// Employee identifier
        employee: String,

        /// entry | exit (in/out accepted)
        kind: String,

        /// Company-local timestamp (YYYY-MM-DD HH:MM[:SS])
        at: String,

        #[arg(long = "method", default_value = "manual", help = "manual, facial, location")]
        method: String,

        #[arg(long = "tolerance", help = "Record-level tolerance override in minutes")]
        tolerance: Option<i64>,
    },

    /// Correct an event: retire it and create a linked replacement
    Adjust {
        event_id: String,

        #[arg(long = "at", help = "Corrected timestamp (YYYY-MM-DD HH:MM[:SS])")]
        at: String,

        #[arg(long = "kind", help = "Corrected kind (defaults to the original kind)")]
        kind: Option<String>,

        #[arg(long = "reason", default_value = "", help = "Justification (required)")]
        reason: String,
    },

    /// Retire an event without replacement
    Invalidate {
        event_id: String,

        #[arg(long = "reason", default_value = "", help = "Justification (required)")]
        reason: String,
    },

    /// List stored events of one employee-day, retired ones included with --all
    Events {
        employee: String,

        /// YYYY-MM-DD
        date: String,

        #[arg(long = "all", help = "Include adjusted and invalidated events")]
        all: bool,
    },

    /// Daily summaries
    List {
        employee: String,

        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or a range start:end")]
        period: Option<String>,

        #[arg(long = "json", help = "Print summaries as JSON")]
        json: bool,
    },

    /// Monthly summary
    Monthly {
        employee: String,

        /// YYYY-MM
        month: String,

        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
