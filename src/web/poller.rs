//! Background refresh loop.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

use crate::dashboard::Dashboard;

/// Refresh `dashboard` every `period` until the task is aborted.
///
/// The first refresh happens one full period after the call.
pub fn spawn_poller(dashboard: Arc<Dashboard>, period: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // interval fires immediately once
        ticker.tick().await;

        loop {
            ticker.tick().await;
            tracing::debug!("Background refresh");
            dashboard.refresh().await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::scripted::ScriptedSource;
    use crate::client::Endpoints;
    use crate::view::ElementId;
    use serde_json::json;

    #[tokio::test]
    async fn test_poller_refreshes_periodically() {
        let source = Arc::new(
            ScriptedSource::new().ok("http://api.test/health", json!({ "status": "ok" })),
        );
        let dashboard = Arc::new(Dashboard::new(
            source.clone(),
            Endpoints::new("http://api.test", "http://render.test/health", 20),
        ));

        let handle = spawn_poller(Arc::clone(&dashboard), Duration::from_millis(40));
        tokio::time::sleep(Duration::from_millis(150)).await;
        handle.abort();

        // five requests per refresh, at least two refreshes
        assert!(source.request_count() >= 10);
        assert_eq!(
            dashboard.document().text(ElementId::ApiHealth).await.unwrap(),
            "Çalışıyor"
        );
    }
}
