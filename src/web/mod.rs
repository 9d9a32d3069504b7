//! Dashboard Web Server
//!
//! Serves the dashboard page rendered from the shared document and
//! accepts the page's three buttons as form posts, built with Axum.
//!
//! # Example
//!
//! ```rust,no_run
//! use regdash::config::Config;
//! use regdash::dashboard::Dashboard;
//! use regdash::web::{serve, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let dashboard = Arc::new(Dashboard::from_config(&config.backend)?);
//!     dashboard.refresh().await;
//!
//!     serve(AppState::new(dashboard), &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod poller;
pub mod routes;
pub mod state;

pub use error::{WebError, WebResult};
pub use poller::spawn_poller;
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the dashboard router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page))
        .route("/refresh", post(routes::refresh))
        .route("/ingest", post(routes::ingest))
        .route("/search", post(routes::search))
        .route("/dashboard.json", get(routes::snapshot))
        .route("/regions/:id", get(routes::region))
        .route("/health/live", get(routes::liveness))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), WebError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::scripted::ScriptedSource;
    use crate::client::{Endpoints, FetchRequest};
    use crate::dashboard::Dashboard;
    use crate::view::ElementId;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_app(source: ScriptedSource) -> (Router, Arc<Dashboard>, Arc<ScriptedSource>) {
        let source = Arc::new(source);
        let dashboard = Arc::new(Dashboard::new(
            source.clone(),
            Endpoints::new("http://api.test", "http://render.test/health", 20),
        ));
        let router = build_router(AppState::new(Arc::clone(&dashboard)));
        (router, dashboard, source)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _, _) = create_test_app(ScriptedSource::new());

        let response = app
            .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_page_renders_document() {
        let (app, dashboard, _) = create_test_app(ScriptedSource::new());
        dashboard.refresh().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_string(response).await;
        assert!(page.contains("<span id=\"apiHealth\">Hata</span>"));
        assert!(page.contains("<ul id=\"regList\"><li>Kayıt yok.</li></ul>"));
    }

    #[tokio::test]
    async fn test_search_form_redirects_and_renders() {
        let source = ScriptedSource::new().ok(
            "http://api.test/search?q=kira",
            json!([{ "id": 9, "version": 1, "title": "Kira Yönetmeliği" }]),
        );
        let (app, dashboard, _) = create_test_app(source);

        let response = app.oneshot(form_post("/search", "q=kira")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let doc = dashboard.document();
        assert_eq!(doc.text(ElementId::SearchInput).await.unwrap(), "kira");
        assert_eq!(doc.list(ElementId::SearchList).await.unwrap(), vec!["9 | v1 | Kira Yönetmeliği"]);
    }

    #[tokio::test]
    async fn test_ingest_form_posts_seed() {
        let (app, dashboard, source) = create_test_app(ScriptedSource::new());

        let response = app
            .oneshot(form_post("/ingest", "seed=https%3A%2F%2Fwww.mevzuat.gov.tr%2F"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            source.requests()[0],
            FetchRequest::post("http://api.test/ops/ingest?seed=https%3A%2F%2Fwww.mevzuat.gov.tr%2F")
        );
        assert_eq!(
            dashboard.document().text(ElementId::SeedInput).await.unwrap(),
            "https://www.mevzuat.gov.tr/"
        );
        assert!(dashboard
            .document()
            .text(ElementId::IngestResult)
            .await
            .unwrap()
            .contains("Ingest başarısız"));
    }

    #[tokio::test]
    async fn test_refresh_button() {
        let source = ScriptedSource::new().ok("http://api.test/health", json!({ "status": "ok" }));
        let (app, dashboard, source) = create_test_app(source);

        let response = app.oneshot(form_post("/refresh", "")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(source.request_count(), 5);
        assert_eq!(
            dashboard.document().text(ElementId::ApiHealth).await.unwrap(),
            "Çalışıyor"
        );
    }

    #[tokio::test]
    async fn test_snapshot_and_region_json() {
        let (app, _, _) = create_test_app(ScriptedSource::new());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/dashboard.json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["regions"]["searchBtn"]["value"], "Ara");
        assert!(body["refreshed_at"].is_null());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/regions/statRender").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/regions/bogus").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
