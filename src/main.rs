//! Wordfall - unified CLI.
//!
//! `serve` runs the word server with the embedded browser client;
//! `play` runs the native terminal client.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordfall::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port } => run_server(host, port).await,
        Command::Play {
            difficulty,
            server_url,
        } => wordfall::tui::run(difficulty, server_url).await,
    }
}

/// Run the word server
async fn run_server(host: String, port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Wordfall word server");
    wordfall::server::run(&host, port).await
}
