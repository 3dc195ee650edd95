use crate::export::Language;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rTimesheet
/// Keep track of your work hours. Add, delete, update records.
/// Export and print at the end of the month!
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep track of your work hours. Add, delete, update records. Export and print at the end of the month!",
    after_help = "Type <SUBCOMMAND> --help for more info.",
    long_about = None
)]
pub struct Cli {
    /// Do not ask anything, fail on missing or invalid input
    #[arg(global = true, short = 'n', long = "non-interactive")]
    pub non_interactive: bool,

    /// Override configuration file path (useful for tests or separate ledgers)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct DateArgs {
    /// Date of the record
    #[arg(short = 'd', long = "date", value_name = "DD.MM.YYYY")]
    pub date: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct RecordArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Begin and end time of the work day
    #[arg(short = 'w', long = "work-hours", value_name = "HH:MM-HH:MM")]
    pub work_hours: Option<String>,

    /// Begin and end time of the break
    #[arg(short = 'b', long = "break-time", value_name = "HH:MM-HH:MM")]
    pub break_time: Option<String>,

    /// Comment of the record, if needed
    #[arg(short = 'c', long = "comment")]
    pub comment: Option<String>,

    /// Special records only need a date and a comment (credited 8 hours)
    #[arg(short = 's', long = "special-record")]
    pub special: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directories, the configuration file and blank templates
    Init {
        /// Overwrite existing templates
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Add a new record
    Add(RecordArgs),

    /// Update an existing record
    Update(RecordArgs),

    /// Delete an existing record
    Delete(DateArgs),

    /// Export records of a month as .xlsx file
    Export {
        #[command(flatten)]
        date: DateArgs,

        /// Language of weekday and month names
        #[arg(long = "lang", value_enum, default_value = "de")]
        lang: Language,
    },

    /// List the records of a month
    List(DateArgs),

    /// Configure the app with key=value pairs
    Config {
        /// Enter a key=value pair configuration
        #[arg(long = "set", value_name = "KEY=VALUE", conflicts_with = "list")]
        set: Option<String>,

        /// See the app's configuration
        #[arg(long = "list")]
        list: bool,
    },
}
