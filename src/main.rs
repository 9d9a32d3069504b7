//! Regdash Dashboard Server
//!
//! Run with: cargo run --bin regdash
//!
//! # Configuration
//!
//! Config file search order: `$REGDASH_CONFIG`, `~/.config/regdash/config.toml`,
//! `/etc/regdash/config.toml`, `./config.toml`. Environment variables:
//! - `REGDASH_BACKEND_URL`: Platform API base URL (default: http://localhost:8000)
//! - `REGDASH_RENDER_HEALTH_URL`: Render service health URL
//! - `REGDASH_HOST` / `REGDASH_PORT`: Bind address (default: 0.0.0.0:8084)
//! - `REGDASH_POLL_INTERVAL`: Seconds between background refreshes, 0 disables
//! - `RUST_LOG`: Log filter (default: from config, else info)

use anyhow::Context;
use regdash::config::{Config, LoadReport};
use regdash::dashboard::Dashboard;
use regdash::logging::init_tracing;
use regdash::web::{serve, spawn_poller, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, report) = match std::env::var("REGDASH_CONFIG") {
        Ok(path) => {
            let config = Config::load_with_env(&PathBuf::from(&path))
                .with_context(|| format!("failed to load config from {}", path))?;
            (config, LoadReport::from_path(path))
        }
        Err(_) => Config::load_default(),
    };

    // Config search runs before the subscriber exists, so its outcome is logged here
    init_tracing(&config.logging);
    report.log();

    tracing::info!("Starting Regdash dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Backend: {}", config.backend.base_url);
    tracing::info!("Render service health: {}", config.backend.render_health_url);

    let dashboard = Arc::new(
        Dashboard::from_config(&config.backend).context("failed to build HTTP client")?,
    );

    // Page-load refresh
    dashboard.refresh().await;

    let poller = if config.poll.interval_secs > 0 {
        tracing::info!("Background refresh every {}s", config.poll.interval_secs);
        Some(spawn_poller(
            Arc::clone(&dashboard),
            Duration::from_secs(config.poll.interval_secs),
        ))
    } else {
        tracing::info!("Background refresh disabled");
        None
    };

    serve(AppState::new(dashboard), &config.server)
        .await
        .context("dashboard server failed")?;

    if let Some(handle) = poller {
        handle.abort();
    }

    tracing::info!("Regdash dashboard stopped");
    Ok(())
}
