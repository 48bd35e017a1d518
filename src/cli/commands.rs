//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logseq-meetings")]
#[command(
    about = "Append meeting note templates from Google Calendar to Logseq journals",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Day to sync (e.g., today, yesterday, "last monday", 2024-03-01)
    #[arg(value_name = "TIME_REF")]
    pub time_ref: Option<String>,

    /// Print the notes that would be appended without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Directory holding config.toml, credentials.json and token.json
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default config.toml
    Init {
        /// Directory to initialize (default: the home directory)
        path: Option<PathBuf>,
    },

    /// Authorize read-only access to Google Calendar
    Auth,

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

    /// List meetings already recorded in a day's journal page
    List {
        /// Day to inspect (default: today)
        #[arg(value_name = "TIME_REF")]
        time_ref: Option<String>,
    },
}
