//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(about = "Personal notes manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the notes file (default: $JOTTER_DATA_DIR or the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep notes in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, newest first
    List,

    /// Show a single note
    Show {
        /// Note id
        id: String,
    },

    /// Create a new note
    New {
        /// Note title (required, must not be blank)
        #[arg(short, long)]
        title: String,

        /// Note content
        #[arg(short, long, default_value = "")]
        content: String,

        /// Use this id instead of generating one
        #[arg(long)]
        id: Option<String>,
    },

    /// Edit an existing note
    Edit {
        /// Note id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Note id
        id: String,
    },

    /// Show storage mode, feature flags and note count
    Status,
}
