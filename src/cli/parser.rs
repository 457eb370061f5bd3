use clap::{Parser, Subcommand};

/// Command-line interface definition for horario
/// CLI application to build a weekly class schedule from course-offering CSV exports
#[derive(Parser)]
#[command(
    name = "horario",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import course-offering CSV files, pick sections and view your weekly schedule",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(
            long = "op",
            value_name = "OPERATION",
            help = "Only show one operation (import, save, load, discard, ...)"
        )]
        operation: Option<String>,
    },

    /// Import CSV files and print the selected classes and the weekly grid
    Show {
        /// Semicolon-delimited course-offering CSV files
        #[arg(required = true, value_name = "FILE")]
        files: Vec<String>,

        /// Preview the sections of this course title in the grid
        #[arg(long, short = 't')]
        title: Option<String>,

        /// Toggle every section with this NRC (repeatable)
        #[arg(long = "select", short = 's', value_name = "NRC")]
        select: Vec<String>,

        /// Restore the saved schedule before applying --select
        #[arg(long)]
        load: bool,

        /// Save the resulting selection as the saved schedule
        #[arg(long)]
        save: bool,
    },

    /// List the course titles found in CSV files
    Titles {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<String>,
    },

    /// List the sections offered for a course title
    Sections {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<String>,

        #[arg(long, short = 't')]
        title: String,
    },

    /// Inspect or discard the saved schedule
    Saved {
        #[arg(long = "print", help = "Print the saved schedule grouped by section")]
        print: bool,

        #[arg(long = "discard", help = "Delete the saved schedule")]
        discard: bool,
    },

    /// Interactive session reading commands from stdin
    Shell {
        /// CSV files to import when the session starts
        #[arg(value_name = "FILE")]
        files: Vec<String>,
    },
}
