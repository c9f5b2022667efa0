//! Location Service — CLI Server
//!
//! ```sh
//! # Run with default config (~/.config/location-service/config.toml)
//! location-service
//!
//! # Custom config path
//! location-service --config /etc/location-service/config.toml
//!
//! # Override port
//! location-service --port 8080
//!
//! # Validate config without starting
//! location-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use location_service::config::AppConfig;
use location_service::server::{init_tracing, ServerHandle, ServerOptions};

/// Location reporting backend: CRUD over HTTP for map markers.
#[derive(Parser, Debug)]
#[command(
    name = "location-service",
    version,
    about = "REST service storing reported locations",
    long_about = "Location Service — REST API for creating, reading, updating and deleting \
                  reported locations, with lookup by organisation phone.\n\n\
                  Default config: ~/.config/location-service/config.toml\n\
                  DATABASE_URL overrides the configured store connection string."
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "LOCATION_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
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
    let dotenv_path = location_service::config::load_dotenv();

    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(location_service::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    config.apply_env_overrides();
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config);
    if let Some(path) = dotenv_path {
        info!("Environment loaded from {}", path.display());
    }
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.redacted_url());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
