use crate::core::calculator::period::PeriodKind;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for offwork
/// CLI application to log the time you leave work and review the trend
#[derive(Parser)]
#[command(
    name = "offwork",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log off-work times and get weekly/monthly averages, on-time rate and overtime",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a shared folder)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the data directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

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

    /// Show or change the tracking settings (target time, workdays, ...)
    Settings {
        #[arg(long = "print", help = "Print the stored settings")]
        print: bool,

        #[arg(long = "target", help = "Target off-work time (HH:MM)")]
        target: Option<String>,

        #[arg(
            long = "workdays",
            help = "Workday mask Monday→Sunday, e.g. 1111100"
        )]
        workdays: Option<String>,

        #[arg(long = "retention", help = "Data retention in days")]
        retention: Option<String>,

        #[arg(long = "theme", help = "UI theme (light or dark)")]
        theme: Option<String>,
    },

    /// Add or replace the off-work time of a day
    Add {
        /// Date of the record (YYYY-MM-DD or "today")
        date: String,

        /// Off-work time (HH:MM)
        time: String,

        #[arg(long = "note", help = "Free-text note for the day")]
        note: Option<String>,
    },

    /// Delete the record of a day
    Del {
        date: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List records, most recent first
    List {
        #[arg(long, short, help = "Maximum number of records to show")]
        limit: Option<usize>,

        #[arg(long, short, value_enum, help = "Only records of this period")]
        period: Option<PeriodKind>,
    },

    /// This week and this month at a glance
    Dashboard,

    /// Detailed statistics for a period
    Stats {
        #[arg(long, short, value_enum, help = "Period to analyse")]
        period: Option<PeriodKind>,

        #[arg(
            long = "compare",
            help = "Compare with: previous, 7, 30, 90 or none"
        )]
        compare: Option<String>,

        #[arg(long = "by-year", help = "Split the monthly breakdown by year")]
        by_year: bool,
    },

    /// Export records to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[arg(long, short, value_enum, help = "Period of the CSV rows")]
        period: Option<PeriodKind>,

        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,
    },
}
