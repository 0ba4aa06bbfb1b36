//! Wishwall Server
//!
//! Run with: cargo run --bin wishwall
//!
//! # Configuration
//!
//! Read from `--config <path>` or the first of
//! `<config dir>/wishwall/config.toml`, `/etc/wishwall/config.toml`,
//! `./config.toml`. Environment variables override the file:
//! - `WISHWALL_WISHES_FILE`: JSON file holding the wishes (default: wishes.json)
//! - `WISHWALL_HOST`: Host to bind to (default: 0.0.0.0)
//! - `WISHWALL_PORT`: Port to listen on (default: 3001)
//! - `WISHWALL_DASHBOARD_TITLE`, `WISHWALL_REFRESH_SECS`: Dashboard page
//! - `WISHWALL_LOG_LEVEL`, `WISHWALL_LOG_FORMAT`: Logging (format: pretty or json)
//! - `RUST_LOG`: Full filter directive, takes precedence over the log level

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wishwall::api::{serve, ApiConfig, AppState};
use wishwall::config::{Config, LoggingConfig};
use wishwall::storage::WishStore;

#[derive(Parser)]
#[command(name = "wishwall")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect wishes over HTTP and show them on a live dashboard")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.or_else(Config::find_default_path);
    let config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Wishwall server v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    // Bootstrap the wishes file before accepting traffic
    let store = Arc::new(WishStore::new(&config.storage.wishes_file));
    if !store.ensure_exists().await? {
        tracing::info!("Using existing wishes file {:?}", store.path());
    }

    let api_config = ApiConfig::from(&config);
    let state = AppState::new(store, api_config.clone());

    // Run server
    tracing::info!("Starting server on {}:{}", api_config.host, api_config.port);
    serve(state, &api_config).await?;

    tracing::info!("Wishwall server stopped");
    Ok(())
}

/// Initialize tracing with either the pretty or the JSON formatter
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("wishwall={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
