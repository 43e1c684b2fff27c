use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for babylog
/// CLI application to log baby urination/defecation events with SQLite
#[derive(Parser)]
#[command(
    name = "babylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small baby log: record urination/defecation events and chart them",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user (overrides BABYLOG_USER and the `user` config key)
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Use a throw-away in-memory store instead of the database
    #[arg(global = true, long = "memory", hide = true)]
    pub memory: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record an entry
    Add {
        /// Entry type: urination (pee, u) or defecation (poo, d)
        kind: String,

        /// When it happened: RFC 3339, or local "YYYY-MM-DD HH:MM" (default: now)
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// List entries, newest first
    List {
        #[arg(long = "json", help = "Print entries as JSON")]
        json: bool,
    },

    /// Delete an entry by id
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show daily, hourly and per-type charts
    Stats {
        /// Reference instant (default: now)
        #[arg(long = "now")]
        now: Option<String>,

        /// Aggregate the entries of a JSON file instead of the store
        #[arg(long = "input", value_name = "FILE")]
        input: Option<String>,

        #[arg(long = "json", help = "Print chart data as JSON")]
        json: bool,
    },

    /// Generate or clear demo data
    #[command(group(ArgGroup::new("action").required(true).args(["generate", "clear"])))]
    Demo {
        #[arg(long = "generate", help = "Create random entries for the last 7 days")]
        generate: bool,

        #[arg(long = "clear", help = "Delete all entries of the current user")]
        clear: bool,

        #[arg(long = "seed", requires = "generate", help = "Seed for reproducible data")]
        seed: Option<u64>,

        /// Reference instant (default: now)
        #[arg(long = "now", requires = "generate")]
        now: Option<String>,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
