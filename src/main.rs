//! Toystore customer service
//!
//! ```sh
//! # Run with default config (~/.config/toystore-customer/config.toml)
//! customer-service
//!
//! # Custom config path and port
//! customer-service --config /etc/toystore-customer/config.toml --api-port 8081
//!
//! # No database, data kept in memory
//! customer-service --in-memory
//!
//! # Validate config without starting
//! customer-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use toystore_customer::config::AppConfig;
use toystore_customer::server::{init_tracing, ServerHandle, ServerOptions};

/// Customer and address registry REST API.
#[derive(Parser, Debug)]
#[command(
    name = "customer-service",
    version,
    about = "Customer and address registry REST API",
    long_about = "REST API for toystore customers (keyed by CPF) and their addresses.\n\n\
                  Default config: ~/.config/toystore-customer/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CUSTOMER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Keep data in memory instead of SQLite.
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(toystore_customer::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match &load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.api_port {
        info!("CLI override: api_port = {}", port);
        config.server.api_port = port;
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            return Err(e.into());
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.api_address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        in_memory: cli.in_memory,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
