//! Taskcal Scheduler Server
//!
//! REST API server for the task scheduling engine.

use clap::Parser;
use scheduler_server::config::{build_config, CliArgs as ConfigCliArgs};
use scheduler_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Taskcal Scheduler Server - REST API for occurrence generation
#[derive(Parser, Debug)]
#[command(name = "scheduler_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "TASKCAL_SERVER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "TASKCAL_SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASKCAL_LOG_LEVEL")]
    log_level: Option<String>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Taskcal Scheduler Server v{}", scheduler_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        max_occurrences = ?config.max_occurrences,
        "Server configuration loaded"
    );

    let server = Server::new(config);
    tracing::info!(address = %server.socket_addr(), "Starting server");

    server.run().await?;

    Ok(())
}
