//! Platform API Client
//!
//! Everything the dashboard needs to talk to the platform backend:
//! the fixed endpoint table, the view models it reads back, and the
//! null-safe fetch layer that collapses every failure into "absent".

pub mod endpoints;
pub mod fetch;
pub mod models;

#[cfg(test)]
pub(crate) mod scripted;

pub use endpoints::Endpoints;
pub use fetch::{safe_fetch, safe_json, FetchError, FetchRequest, HttpBackend, JsonSource, Method};
pub use models::{HealthStatus, IngestResult, RecordSummary, StatsSnapshot};
