//! CLI definitions and command implementations for vaic-store.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vaic_store::Collection;

/// vaic-store - Inspect and maintain the VAIC contest data store
#[derive(Parser)]
#[command(name = "vaic-store")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/vaic-store/vaic-store.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show record counts and stored sizes per collection
    Summary {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print one collection as JSON
    List { collection: CollectionArg },

    /// Write an export to stdout or a file
    Export {
        scope: Scope,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace data from a previously exported file
    Import { scope: Scope, file: PathBuf },

    /// Merge a JSON object of fields onto one record
    Update {
        collection: CollectionArg,
        id: String,
        /// e.g. '{"score": 200}'
        patch: String,
    },

    /// Delete one record (contests also lose their challenges)
    Delete { collection: CollectionArg, id: String },

    /// Wipe all stored data and restore the built-in defaults
    Reset {
        /// Skip the safety check
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CollectionArg {
    Users,
    Contests,
    Challenges,
    Attempts,
    Progress,
    Events,
    Forum,
}

impl From<CollectionArg> for Collection {
    fn from(arg: CollectionArg) -> Self {
        match arg {
            CollectionArg::Users => Collection::Users,
            CollectionArg::Contests => Collection::Contests,
            CollectionArg::Challenges => Collection::Challenges,
            CollectionArg::Attempts => Collection::ContestAttempts,
            CollectionArg::Progress => Collection::UserProgress,
            CollectionArg::Events => Collection::Events,
            CollectionArg::Forum => Collection::ForumTopics,
        }
    }
}

/// What an export or import covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scope {
    /// Everything, as one bundle
    All,
    Users,
    /// Contests, challenges and attempts
    Contests,
    Events,
    Forum,
}
