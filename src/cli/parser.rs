use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rOvertime
/// Overtime tracking service and admin CLI backed by SQLite
#[derive(Parser)]
#[command(
    name = "rovertime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Overtime tracking: start, pause, resume and end overtime sessions outside office hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current instant is this RFC3339 timestamp
    #[arg(global = true, long = "now", hide = true, value_name = "RFC3339")]
    pub now: Option<String>,

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

    /// Manage the database (migrations, integrity checks)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeCmd,
    },

    /// Manage API accounts (bearer tokens)
    Account {
        #[command(subcommand)]
        action: AccountCmd,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectCmd,
    },

    /// Show or change the weekly office hours
    OfficeHours {
        #[command(subcommand)]
        action: OfficeHoursCmd,
    },

    /// Drive an employee's overtime timer
    Track {
        /// Employee id (defaults to `default_employee` from the config)
        #[arg(long, short)]
        employee: Option<String>,

        #[command(subcommand)]
        action: TrackCmd,
    },

    /// Review the overtime ledger
    Overtime {
        #[command(subcommand)]
        action: OvertimeCmd,
    },

    /// Run the HTTP service
    Serve {
        /// Address to bind (overrides `bind_address`)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCmd {
    /// Register an employee
    Add { id: String, full_name: String },
    /// List employees
    List,
}

#[derive(Subcommand)]
pub enum AccountCmd {
    /// Register a bearer token, optionally linked to an employee
    Add {
        token: String,
        email: String,
        #[arg(long)]
        employee: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ProjectCmd {
    /// Register a project
    Add {
        name: String,
        #[arg(long)]
        code: Option<String>,
    },
    /// List projects
    List,
}

#[derive(Subcommand)]
pub enum OfficeHoursCmd {
    /// Show the week
    List,
    /// Declare a working day (day: 0-6 or name, Sunday = 0)
    Set {
        day: String,
        /// Start of office hours (HH:MM)
        start: String,
        /// End of office hours (HH:MM)
        end: String,
    },
    /// Mark a day as non-working
    Off { day: String },
    /// Remove a day's configuration
    Clear { day: String },
}

#[derive(Subcommand)]
pub enum TrackCmd {
    /// Start a session (only outside office hours)
    Start {
        /// pending_tasks, new_tasks or tracking
        #[arg(long = "type", value_name = "TYPE")]
        overtime_type: String,

        #[arg(long = "project-id")]
        project_id: Option<i64>,

        #[arg(long = "project-name")]
        project_name: Option<String>,

        #[arg(long)]
        memo: Option<String>,
    },
    /// Open a break
    Pause,
    /// Close the open break
    Resume,
    /// Finalize the session into the ledger
    End,
    /// Show the active session
    Status,
}

#[derive(Subcommand)]
pub enum OvertimeCmd {
    /// List ledger entries
    List {
        #[arg(long, short)]
        employee: Option<String>,

        /// YYYY, YYYY-MM, YYYY-MM-DD, ranges start:end, or all
        #[arg(long, short)]
        period: Option<String>,
    },
    /// Approve a pending entry
    Approve { id: i64 },
    /// Reject a pending entry
    Reject { id: i64 },
    /// Export ledger entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short)]
        employee: Option<String>,

        #[arg(long, short)]
        period: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
