//! Server binary for the Snipes scorekeeping service.
//!
//! Loads configuration, seeds the in-memory store, and serves the REST API
//! together with the client bundle until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `snipes-config.yaml` (or `$SNIPES_CONFIG`)
//!    and apply environment overrides
//! 2. Initialize structured logging (tracing)
//! 3. Create the scoring store and seed the demo group
//! 4. Serve HTTP until shutdown

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use snipes_api::AppState;
use snipes_core::{AppConfig, ScoringStore, seed_demo_group};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerBinError;

/// Default config file, resolved against the working directory.
const DEFAULT_CONFIG_PATH: &str = "snipes-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server cannot
/// bind its address.
#[tokio::main]
async fn main() -> Result<(), ServerBinError> {
    // 1. Load configuration. Logging is not up yet, so the outcome is
    //    reported after step 2.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("snipes-server starting");
    match &source {
        Some(path) => info!(path = %path.display(), "Config file loaded"),
        None => info!("Config file not found, using defaults"),
    }
    info!(
        host = %config.server.host,
        port = config.server.port,
        static_dir = %config.web.static_dir,
        spa_fallback = config.web.spa_fallback,
        "Configuration loaded"
    );

    // 3. Create the store.
    let mut store = ScoringStore::new();
    if config.store.seed_demo_group {
        seed_demo_group(&mut store);
    }
    info!(groups = store.group_count(), "Scoring store ready");

    let state = Arc::new(AppState::new(store));

    // 4. Serve until Ctrl-C.
    snipes_api::start_server(&config, state, snipes_api::shutdown_signal()).await?;

    info!("snipes-server exited cleanly");
    Ok(())
}

/// Load configuration and apply environment overrides.
///
/// Reads `$SNIPES_CONFIG` when set, otherwise `snipes-config.yaml` if it
/// exists. Without a file, defaults are used. Returns the path that was
/// read, if any.
fn load_config() -> Result<(AppConfig, Option<PathBuf>), ServerBinError> {
    let explicit = std::env::var_os("SNIPES_CONFIG").map(PathBuf::from);
    let path = explicit.or_else(|| {
        let default = Path::new(DEFAULT_CONFIG_PATH);
        default.exists().then(|| default.to_path_buf())
    });

    match path {
        Some(path) => {
            let config = AppConfig::from_file(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            let mut config = AppConfig::default();
            config.apply_env_overrides()?;
            Ok((config, None))
        }
    }
}
