//! View Models
//!
//! Request-scoped shapes read back from the backend. None of these are
//! cached; each refresh fetches and renders them anew.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::view::render::INGEST_FAILED;

/// `{status}` payload of a health probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Counters from `/ops/stats`.
///
/// Each field falls back on its own: a missing, `null` or mistyped value
/// leaves that field `None` without discarding the rest of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_regulations: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub updated_regulations: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub storm_urls: Option<u64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub render_enabled: Option<bool>,
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_u64())
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_bool())
}

/// One row of the regulation list, change list or search results.
///
/// The backend sends more fields (url, source, last_seen_at, ...);
/// only the three the dashboard shows are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: u64,
    pub version: u32,
    pub title: String,
}

/// Outcome of `POST /ops/ingest`
#[derive(Debug, Clone, PartialEq)]
pub enum IngestResult {
    /// Raw response body, shown as-is
    Completed(Value),
    /// Any transport, status or decode failure
    Failed,
}

impl IngestResult {
    pub fn from_response(response: Option<Value>) -> Self {
        match response {
            Some(value) => IngestResult::Completed(value),
            None => IngestResult::Failed,
        }
    }

    /// JSON shown to the user; failures become `{"error": ...}`
    pub fn to_json(&self) -> Value {
        match self {
            IngestResult::Completed(value) => value.clone(),
            IngestResult::Failed => serde_json::json!({ "error": INGEST_FAILED }),
        }
    }

    /// Two-space indented rendering of [`IngestResult::to_json`]
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_else(|_| self.to_json().to_string())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, IngestResult::Failed)
    }
}
