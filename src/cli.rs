//! Command-line interface for strictly_roshambo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Roshambo - rock-paper-scissors against a random opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_roshambo")]
#[command(about = "Rock-paper-scissors against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP session service
    Http {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "roshambo.toml")]
        config: PathBuf,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Play in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "roshambo.toml")]
        config: PathBuf,

        /// Seed for computer moves (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the rules
    Rules,
}
