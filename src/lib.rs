//! # Regdash
//!
//! Dashboard for the regulation platform. Polls the platform API for
//! service health and ingest statistics, lists the most recent and most
//! recently changed regulations, triggers ingest runs and searches.
//!
//! Every backend failure is absorbed: health shows `Hata`, counters show
//! `0`, lists show a single `Kayıt yok.` line.
//!
//! ## Modules
//!
//! - [`client`]: Endpoint table, view models and the null-safe fetch layer
//! - [`view`]: In-memory document, formatting, the HTML page and CLI reports
//! - [`dashboard`]: `refresh`, `ingest` and `search`
//! - [`web`]: Dashboard server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use regdash::{BackendConfig, Dashboard, ElementId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Dashboard::from_config(&BackendConfig::default())?;
//!
//!     dashboard.refresh().await;
//!     dashboard.search("iş kanunu").await;
//!
//!     let doc = dashboard.document();
//!     println!("API: {:?}", doc.text(ElementId::ApiHealth).await);
//!     println!("Results: {:?}", doc.list(ElementId::SearchList).await);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod view;
pub mod web;

pub use client::{
    Endpoints, FetchError, FetchRequest, HealthStatus, HttpBackend, IngestResult, JsonSource,
    Method, RecordSummary, StatsSnapshot,
};

pub use config::{
    BackendConfig, Config, ConfigError, LoadReport, LoggingConfig, PollConfig, ServerConfig,
};

pub use dashboard::Dashboard;

pub use view::{Document, ElementId, Region, Snapshot};

pub use web::{build_router, serve, spawn_poller, AppState, WebError};
