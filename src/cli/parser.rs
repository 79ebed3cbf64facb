use clap::{Parser, Subcommand};

/// Command-line interface definition for wellnesslog
#[derive(Parser)]
#[command(
    name = "wellnesslog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple wellness logger: record me-time and screen-free minutes, mirror them to a spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override the append file (every added entry is mirrored here)
    #[arg(global = true, long = "append-file", value_name = "FILE")]
    pub append_file: Option<String>,

    /// Override the export file (written by `save`)
    #[arg(global = true, long = "export-file", value_name = "FILE")]
    pub export_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
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

    /// Start an interactive logging session (default)
    Session {
        #[arg(long = "no-reminder", help = "Do not show the periodic wellness reminder")]
        no_reminder: bool,
    },

    /// Validate one entry and append it to the append file
    Add {
        /// Student name (letters and spaces)
        name: String,

        /// Mental wellness activity (letters and spaces)
        activity: String,

        /// Me-time activity (letters and spaces)
        me_time: String,

        /// Screen-free time in minutes (> 0)
        minutes: String,
    },

    /// Show the wellness status for a number of screen-free minutes
    Status {
        /// Screen-free time in minutes
        minutes: String,
    },
}
