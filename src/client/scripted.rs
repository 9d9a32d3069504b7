//! In-memory `JsonSource` for tests: canned responses per URL and a log
//! of every request received.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::fetch::{FetchError, FetchRequest, JsonSource};

#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(u16),
    Malformed,
}

#[derive(Default)]
pub(crate) struct ScriptedSource {
    replies: HashMap<String, Reply>,
    delays: HashMap<String, Duration>,
    log: Mutex<Vec<FetchRequest>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, url: &str, body: Value) -> Self {
        self.replies.insert(url.to_string(), Reply::Json(body));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.replies.insert(url.to_string(), Reply::Status(status));
        self
    }

    pub fn malformed(mut self, url: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Malformed);
        self
    }

    pub fn delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.log.lock().unwrap().len()
    }
}

#[async_trait]
impl JsonSource for ScriptedSource {
    async fn fetch_json(&self, request: &FetchRequest) -> Result<Value, FetchError> {
        self.log.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delays.get(&request.url) {
            tokio::time::sleep(*delay).await;
        }

        match self.replies.get(&request.url) {
            Some(Reply::Json(body)) => Ok(body.clone()),
            Some(Reply::Status(status)) => Err(FetchError::Status { status: *status }),
            Some(Reply::Malformed) => Err(FetchError::Decode("expected value at line 1 column 1".into())),
            None => Err(FetchError::Unavailable),
        }
    }
}
