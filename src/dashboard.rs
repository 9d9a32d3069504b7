//! Dashboard Client
//!
//! The three user-facing operations: `refresh`, `ingest` and `search`.
//! Each one fetches fresh data, tolerates every backend failure by
//! falling back to a default display, and writes the result into the
//! shared [`Document`].
//!
//! Operations are independent and not de-duplicated: overlapping calls
//! interleave their writes and the last one to finish wins.

use std::sync::Arc;

use crate::client::{
    safe_fetch, safe_json, Endpoints, FetchError, FetchRequest, HealthStatus, HttpBackend,
    IngestResult, JsonSource, RecordSummary, StatsSnapshot,
};
use crate::config::BackendConfig;
use crate::view::render::{self, INGEST_PENDING};
use crate::view::{Document, ElementId};

pub struct Dashboard {
    source: Arc<dyn JsonSource>,
    endpoints: Endpoints,
    document: Arc<Document>,
}

impl Dashboard {
    pub fn new(source: Arc<dyn JsonSource>, endpoints: Endpoints) -> Self {
        Self {
            source,
            endpoints,
            document: Arc::new(Document::new()),
        }
    }

    /// Dashboard talking HTTP to the configured backend
    pub fn from_config(config: &BackendConfig) -> Result<Self, FetchError> {
        let backend = HttpBackend::from_config(config)?;
        Ok(Self::new(Arc::new(backend), Endpoints::from_config(config)))
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Reload health, stats and both record lists.
    ///
    /// The four loads run concurrently; this returns once all of them
    /// have settled, whatever their outcome.
    pub async fn refresh(&self) {
        tracing::debug!(backend = %self.endpoints.base_url(), "Refreshing dashboard");

        tokio::join!(
            self.load_health(),
            self.load_stats(),
            self.load_regulations(),
            self.load_changes(),
        );

        self.document.mark_refreshed().await;
    }

    /// Trigger an ingest run for `seed`, show its raw result, then refresh
    pub async fn ingest(&self, seed: &str) {
        let seed = seed.trim();
        tracing::info!(seed = %seed, "Triggering ingest");

        self.document
            .set_text(ElementId::IngestResult, INGEST_PENDING)
            .await;

        let request = FetchRequest::post(self.endpoints.ingest(seed));
        let result = IngestResult::from_response(safe_json(self.source.as_ref(), &request).await);
        if result.is_failed() {
            tracing::warn!(seed = %seed, "Ingest failed");
        }

        self.document
            .set_text(ElementId::IngestResult, result.to_pretty())
            .await;

        self.refresh().await;
    }

    /// Replace the search results with matches for `query`.
    ///
    /// A blank query does nothing.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        tracing::debug!(query = %query, "Searching");

        let request = FetchRequest::get(self.endpoints.search(query));
        let rows: Option<Vec<RecordSummary>> = safe_fetch(self.source.as_ref(), &request).await;

        self.document
            .fill_list(ElementId::SearchList, rows.as_deref(), render::format_record)
            .await;
    }

    async fn load_health(&self) {
        let api = FetchRequest::get(self.endpoints.health());
        let renderer = FetchRequest::get(self.endpoints.render_health());

        let (api, renderer) = tokio::join!(
            safe_fetch::<HealthStatus>(self.source.as_ref(), &api),
            safe_fetch::<HealthStatus>(self.source.as_ref(), &renderer),
        );

        self.document
            .set_text(ElementId::ApiHealth, render::health_label(api.as_ref()))
            .await;
        self.document
            .set_text(ElementId::RenderHealth, render::health_label(renderer.as_ref()))
            .await;
    }

    async fn load_stats(&self) {
        let request = FetchRequest::get(self.endpoints.stats());
        let stats: Option<StatsSnapshot> = safe_fetch(self.source.as_ref(), &request).await;
        let stats = stats.as_ref();

        let doc = &self.document;
        doc.set_text(ElementId::StatTotal, render::stat_value(stats, |s| s.total_regulations))
            .await;
        doc.set_text(ElementId::StatUpdated, render::stat_value(stats, |s| s.updated_regulations))
            .await;
        doc.set_text(ElementId::StatStorm, render::stat_value(stats, |s| s.storm_urls))
            .await;
        doc.set_text(ElementId::StatRender, render::render_label(stats))
            .await;
    }

    async fn load_regulations(&self) {
        let request = FetchRequest::get(self.endpoints.regulations());
        let rows: Option<Vec<RecordSummary>> = safe_fetch(self.source.as_ref(), &request).await;
        self.document
            .fill_list(ElementId::RegList, rows.as_deref(), render::format_record)
            .await;
    }

    async fn load_changes(&self) {
        let request = FetchRequest::get(self.endpoints.changes());
        let rows: Option<Vec<RecordSummary>> = safe_fetch(self.source.as_ref(), &request).await;
        self.document
            .fill_list(ElementId::ChangeList, rows.as_deref(), render::format_record)
            .await;
    }
}
