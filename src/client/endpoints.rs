//! Endpoint Table
//!
//! The fixed set of backend URLs the dashboard calls.

use crate::config::BackendConfig;

/// Builds absolute URLs for every backend call
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
    render_health_url: String,
    list_limit: u32,
}

impl Endpoints {
    pub fn new(
        base_url: impl Into<String>,
        render_health_url: impl Into<String>,
        list_limit: u32,
    ) -> Self {
        // Normalize: remove trailing slash
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            render_health_url: render_health_url.into(),
            list_limit,
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.render_health_url.clone(),
            config.list_limit,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /health
    pub fn health(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Render service health probe, not relative to the API base
    pub fn render_health(&self) -> String {
        self.render_health_url.clone()
    }

    /// GET /ops/stats
    pub fn stats(&self) -> String {
        format!("{}/ops/stats", self.base_url)
    }

    /// POST /ops/ingest?seed=...
    pub fn ingest(&self, seed: &str) -> String {
        format!("{}/ops/ingest?seed={}", self.base_url, urlencoding::encode(seed))
    }

    /// GET /regulations?limit=N
    pub fn regulations(&self) -> String {
        format!("{}/regulations?limit={}", self.base_url, self.list_limit)
    }

    /// GET /changes/updated?limit=N
    pub fn changes(&self) -> String {
        format!("{}/changes/updated?limit={}", self.base_url, self.list_limit)
    }

    /// GET /search?q=...
    pub fn search(&self, query: &str) -> String {
        format!("{}/search?q={}", self.base_url, urlencoding::encode(query))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_config(&BackendConfig::default())
    }
}
