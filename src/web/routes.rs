//! Web Routes
//!
//! - GET  /                 - Dashboard page
//! - POST /refresh          - Refresh button
//! - POST /ingest           - Ingest button (form field `seed`)
//! - POST /search           - Search button (form field `q`)
//! - GET  /dashboard.json   - Whole document as JSON
//! - GET  /regions/:id      - One element as JSON
//! - GET  /health/live      - Liveness probe

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::view::{render_page, ElementId, Region, Snapshot};
use crate::web::error::{WebError, WebResult};
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IngestForm {
    #[serde(default)]
    pub seed: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct LiveResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /
pub async fn page(State(state): State<Arc<AppState>>) -> WebResult<Html<String>> {
    let snapshot = state.dashboard.document().snapshot().await;
    Ok(Html(render_page(&snapshot)?))
}

/// POST /refresh
pub async fn refresh(State(state): State<Arc<AppState>>) -> Redirect {
    state.dashboard.refresh().await;
    Redirect::to("/")
}

/// POST /ingest
pub async fn ingest(State(state): State<Arc<AppState>>, Form(form): Form<IngestForm>) -> Redirect {
    let document = state.dashboard.document();
    document.set_input(ElementId::SeedInput, form.seed.as_str()).await;

    state.dashboard.ingest(&form.seed).await;
    Redirect::to("/")
}

/// POST /search
pub async fn search(State(state): State<Arc<AppState>>, Form(form): Form<SearchForm>) -> Redirect {
    let document = state.dashboard.document();
    document.set_input(ElementId::SearchInput, form.q.as_str()).await;

    state.dashboard.search(&form.q).await;
    Redirect::to("/")
}

/// GET /dashboard.json
pub async fn snapshot(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    Json(state.dashboard.document().snapshot().await)
}

/// GET /regions/:id
pub async fn region(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> WebResult<Json<Region>> {
    let element = ElementId::parse(&id).ok_or_else(|| WebError::NotFound(format!("element {}", id)))?;

    state
        .dashboard
        .document()
        .get(element)
        .await
        .map(Json)
        .ok_or_else(|| WebError::Internal(format!("element {} missing from document", element)))
}

/// GET /health/live
pub async fn liveness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<LiveResponse>) {
    (
        StatusCode::OK,
        Json(LiveResponse {
            status: "ok".to_string(),
            uptime_seconds: state.uptime_seconds(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
