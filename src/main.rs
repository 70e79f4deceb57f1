//! keygate - API key extraction server
//!
//! Entry point for the keygate server.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use keygate::server::{init_metrics, init_tracing, App};
use keygate::{Config, Result};

/// keygate - API key extraction server
#[derive(Parser, Debug)]
#[command(name = "keygate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, env = "KEYGATE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "KEYGATE_PORT", default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "KEYGATE_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, env = "KEYGATE_LOG_JSON")]
    log_json: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            log_level: cli.log_level,
            log_json: cli.log_json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_json);

    tracing::info!("keygate v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from(cli);

    tracing::debug!(?config, "Configuration loaded");

    config.validate()?;

    init_metrics();

    App::new(config).run().await
}
