//! Trivia API server
//!
//! ```sh
//! # Run with default config (~/.config/trivia-api/config.toml)
//! trivia-service
//!
//! # Custom config path
//! trivia-service --config /etc/trivia-api/config.toml
//!
//! # Override the port
//! trivia-service --port 8080
//!
//! # Validate config without starting
//! trivia-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use trivia_api::config::{AppConfig, CONFIG_ENV};
use trivia_api::server::{init_tracing, ServerHandle, ServerOptions};

/// Trivia questions and quizzes over a JSON API.
#[derive(Parser, Debug)]
#[command(
    name = "trivia-service",
    version,
    about = "Trivia questions, categories and quizzes over a JSON API",
    long_about = "Trivia API server: paginated questions, search, \
                  per-category listings and random quiz questions.\n\n\
                  Default config: ~/.config/trivia-api/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(trivia_api::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Applied before tracing starts so the override takes effect.
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    if cli.check {
        return match load_error {
            Some(e) => {
                eprintln!("Configuration is invalid: {e}");
                std::process::exit(1);
            }
            None => {
                println!("Configuration is valid");
                println!("   Config file : {}", config_path.display());
                println!("   Address     : {}", config.server.address());
                println!("   Database    : {}", config.database.url);
                println!("   Page size   : {}", config.pagination.questions_per_page);
                println!("   Log level   : {}", config.logging.level);
                println!("   Metrics     : {}", config.metrics.enabled);
                Ok(())
            }
        };
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("🚀 Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
