//! CLI command definitions

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diary")]
#[command(about = "Personal diary of dated entries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(
        short = 'L',
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        env = "DIARY_LOG_LEVEL"
    )]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Preference key the entries are stored under
        #[arg(long, default_value = "diaryList")]
        slot: String,

        /// How dates are displayed (iso, korean)
        #[arg(long, default_value = "iso")]
        date_style: String,
    },

    /// List entries, newest first
    List {
        /// Only show starred entries
        #[arg(short, long)]
        starred: bool,

        /// Earliest date to include (YYYY-MM-DD, today, last monday, ...)
        #[arg(long)]
        from: Option<String>,

        /// Latest date to include
        #[arg(long)]
        to: Option<String>,

        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one entry
    Show {
        /// Entry id or a unique prefix of it
        id: String,
    },

    /// Write a new entry
    Add {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        contents: Option<String>,

        /// Entry date (YYYY-MM-DD, today, yesterday, friday, ...)
        #[arg(short, long, default_value = "today")]
        date: String,
    },

    /// Change an existing entry; omitted fields keep their value
    Edit {
        /// Entry id or a unique prefix of it
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        contents: Option<String>,

        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id or a unique prefix of it
        id: String,
    },

    /// Mark an entry as favorite
    Star {
        /// Entry id or a unique prefix of it
        id: String,
    },

    /// Remove the favorite mark from an entry
    Unstar {
        /// Entry id or a unique prefix of it
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
