use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for acmehr
/// CLI application to keep employee records in a flat data file
#[derive(Parser)]
#[command(
    name = "acmehr",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple HR record-keeping CLI: list, add and edit ACME Machining employees stored in a flat data file",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or a custom file)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Employee field values shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Employee name
    #[arg(long)]
    pub name: Option<String>,

    /// Company email (must contain @acme-machining.com)
    #[arg(long)]
    pub email: Option<String>,

    /// Image path
    #[arg(long)]
    pub image: Option<String>,

    /// Yearly salary (salaried types) or hourly rate (hourly types)
    #[arg(long)]
    pub pay: Option<String>,

    /// Executive role: CEO, CFO, CIO
    #[arg(long)]
    pub role: Option<String>,

    /// Manager department: ACCOUNTING, FINANCE, HR, R_AND_D, MACHINING
    #[arg(long)]
    pub department: Option<String>,

    /// Permanent hire date (YYYY-MM-DD)
    #[arg(long = "hired")]
    pub hired: Option<String>,

    /// Temporary last working day (YYYY-MM-DD)
    #[arg(long = "last-day")]
    pub last_day: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the operation log")]
        print: bool,
    },

    /// List employees (ID#, Type, Name, Pay, Email)
    List {
        /// Only show one employee type (Salaried, Hourly, Executive, Manager, Permanent, Temporary)
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,

        /// Print the full record of each employee instead of the table
        #[arg(long)]
        long: bool,
    },

    /// Show every field of one employee
    Show {
        /// Employee ID (as shown by `list`)
        id: u32,
    },

    /// Add a new employee and save the data file
    Add {
        /// Employee type: Salaried, Hourly, Executive, Manager, Permanent, Temporary
        #[arg(value_name = "TYPE")]
        kind: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Update one or more fields of an employee and save the data file
    Edit {
        /// Employee ID (as shown by `list`)
        id: u32,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Weekly pay report
    Pay,

    /// Create a backup copy of the data file
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,

        /// Overwrite an existing backup without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the employee list
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
