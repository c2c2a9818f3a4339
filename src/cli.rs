//! Command-line interface parsing for Holocron CLI
//!
//! Defines the `search` and `cache` subcommands plus the global cache-file
//! override, parsed with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Holocron CLI - search Star Wars characters with a local cache
#[derive(Parser, Debug)]
#[command(name = "holocron")]
#[command(about = "Search Star Wars characters with a local cache and search history")]
#[command(version)]
pub struct Cli {
    /// Path of the cache file (defaults to the XDG cache directory)
    #[arg(long, global = true, value_name = "PATH", env = "HOLOCRON_CACHE_FILE")]
    pub cache_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for Star Wars characters
    Search {
        /// Name of the character to search for; tokens are joined with spaces
        #[arg(required = true)]
        name: Vec<String>,

        /// Include homeworld information
        #[arg(long)]
        world: bool,
    },

    /// Cache operations
    Cache {
        #[command(subcommand)]
        operation: CacheOp,
    },
}

/// Operations on the local cache
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOp {
    /// Delete the cache file
    Clean,
    /// Show the search history
    History,
}
