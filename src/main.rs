//! Strictly Roshambo - Unified CLI
//!
//! Rock-paper-scissors over HTTP or in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use strictly_roshambo::{Cli, Command, Terminal, load_config};
use strictly_rps::{GameSession, RULES};
use strictly_rps_server::ServerConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Http { config, host, port } => run_http_server(config, host, port).await,
        Command::Play { config, seed } => run_terminal(config, seed),
        Command::Rules => {
            println!("{}", RULES);
            Ok(())
        }
    }
}

/// Installs the tracing subscriber, preferring `RUST_LOG` over the config filter.
fn initialize_tracing(config: &ServerConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run the HTTP session service
async fn run_http_server(
    config_path: PathBuf,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let port_env = std::env::var("PORT").ok();
    let mut config = load_config(&config_path, port_env.as_deref())?;
    if let Some(host) = host {
        config.set_host(host);
    }
    if let Some(port) = port {
        config.set_port(port);
    }

    initialize_tracing(&config);
    info!(addr = %config.bind_address(), "Starting Strictly Roshambo HTTP server");

    strictly_rps_server::serve(&config).await?;
    Ok(())
}

/// Run the terminal front end
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_terminal(config_path: PathBuf, seed: Option<u64>) -> Result<()> {
    let mut config = load_config(&config_path, None)?;
    if let Some(seed) = seed {
        config.set_seed(seed);
    }

    initialize_tracing(&config);

    let session = match config.seed() {
        Some(seed) => GameSession::seeded(*seed),
        None => GameSession::new(),
    };
    let mut terminal = Terminal::new(session, *config.history_window());

    let stdin = io::stdin();
    terminal.run(stdin.lock(), io::stdout())?;
    Ok(())
}
