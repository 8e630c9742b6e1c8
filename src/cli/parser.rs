use clap::{Parser, Subcommand};

/// Command-line interface definition for timekeeper
#[derive(Parser)]
#[command(
    name = "timekeeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "Punch in and out of work and keep track of your overtime",
    long_about = None
)]
pub struct Cli {
    /// Override the entry file (useful for tests or a second log)
    #[arg(global = true, long = "store", value_name = "FILE")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the entry file
    Init,

    /// Show or edit the configuration file
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

    /// Punch in
    Start {
        #[arg(long = "at", value_name = "HH:MM", help = "Start time (default: now)")]
        at: Option<String>,
    },

    /// Punch out and book the worked time
    End {
        #[arg(long = "at", value_name = "HH:MM", help = "End time (default: now)")]
        at: Option<String>,
    },

    /// Correct the overtime balance by a number of minutes
    Overtime {
        /// Minutes to add (negative to subtract)
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },

    /// Show the last entry and the current overtime
    Status,

    /// List entries
    List {
        #[arg(long, short = 'n', help = "Only the N most recent entries")]
        count: Option<usize>,

        #[arg(
            long,
            short = 'd',
            value_name = "YYYY-MM-DD",
            conflicts_with = "count",
            help = "Only the entries of a given day"
        )]
        date: Option<String>,
    },
}
