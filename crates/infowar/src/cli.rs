//! Command-line interface for infowar.

use clap::{Parser, Subcommand};
use infowar::OutputFormat;
use std::path::PathBuf;

/// Infowar - replay, audit and extend Infowar game histories
#[derive(Parser, Debug)]
#[command(name = "infowar")]
#[command(about = "Rules engine tooling for the Infowar ring board game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the configuration file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rebuild a game from a JSON history file and print it
    Replay {
        /// History file (JSON array of entries)
        file: PathBuf,
    },

    /// Append one entry to a history file's game and print the result
    Propose {
        /// History file (JSON array of entries)
        file: PathBuf,

        /// Entry as JSON, e.g. '{"player":"insurgent","position":{"circle":0,"rank":3}}'
        entry: String,
    },

    /// List the slots adjacent to a position
    Neighbors {
        /// Ring index, 0 = outermost
        circle: i64,

        /// Slot index within the ring
        rank: i64,
    },

    /// Step distance between two positions
    Distance {
        /// Ring of the first position
        c1: i64,
        /// Rank of the first position
        r1: i64,
        /// Ring of the second position
        c2: i64,
        /// Rank of the second position
        r2: i64,
    },

    /// Print the JSON Schema of a history entry
    Schema,
}
