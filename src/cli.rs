//! Command-line interface for wordfall.

use crate::words::Difficulty;
use clap::{Parser, Subcommand};

/// Wordfall - falling-words typing game
#[derive(Parser, Debug)]
#[command(name = "wordfall")]
#[command(about = "Falling-words typing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the word server (serves the browser client and word batches)
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },

    /// Play in the terminal
    Play {
        /// Jump straight into this tier instead of showing the menu
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Fetch word batches from a running server instead of sampling
        /// locally, e.g. http://127.0.0.1:5000
        #[arg(long)]
        server_url: Option<String>,
    },
}
