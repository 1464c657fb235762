use crate::types::{LogLevel, OutputFormat, SortArg};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rowdesk")]
#[command(about = "Search, sort and edit a local record table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $ROWDESK_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Use a throwaway in-memory store instead of the database file
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create and seed the database, then report the record count
    Init,

    /// Print one page of the record table
    List {
        /// Case-insensitive substring filter on the name
        #[arg(long)]
        search: Option<String>,

        #[arg(long, default_value = "id")]
        sort: SortArg,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Add a record (blank names are ignored)
    Add { name: String },

    /// Rename a record
    Edit { id: i64, name: String },

    /// Delete a record
    Delete { id: i64 },

    /// Interactive table
    Browse,
}
