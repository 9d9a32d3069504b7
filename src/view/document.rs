//! In-memory Document
//!
//! Stand-in for the browser DOM: one [`Region`] per [`ElementId`].
//! Each write replaces a whole region, so the last writer wins and
//! re-rendering the same input yields the same document.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::render;

/// Element ids the dashboard page is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementId {
    ApiHealth,
    RenderHealth,
    StatTotal,
    StatUpdated,
    StatStorm,
    StatRender,
    RegList,
    ChangeList,
    SearchList,
    SeedInput,
    IngestResult,
    SearchInput,
    RefreshBtn,
    IngestBtn,
    SearchBtn,
}

impl ElementId {
    pub const ALL: [ElementId; 15] = [
        ElementId::ApiHealth,
        ElementId::RenderHealth,
        ElementId::StatTotal,
        ElementId::StatUpdated,
        ElementId::StatStorm,
        ElementId::StatRender,
        ElementId::RegList,
        ElementId::ChangeList,
        ElementId::SearchList,
        ElementId::SeedInput,
        ElementId::IngestResult,
        ElementId::SearchInput,
        ElementId::RefreshBtn,
        ElementId::IngestBtn,
        ElementId::SearchBtn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::ApiHealth => "apiHealth",
            ElementId::RenderHealth => "renderHealth",
            ElementId::StatTotal => "statTotal",
            ElementId::StatUpdated => "statUpdated",
            ElementId::StatStorm => "statStorm",
            ElementId::StatRender => "statRender",
            ElementId::RegList => "regList",
            ElementId::ChangeList => "changeList",
            ElementId::SearchList => "searchList",
            ElementId::SeedInput => "seedInput",
            ElementId::IngestResult => "ingestResult",
            ElementId::SearchInput => "searchInput",
            ElementId::RefreshBtn => "refreshBtn",
            ElementId::IngestBtn => "ingestBtn",
            ElementId::SearchBtn => "searchBtn",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }

    /// Content of this element before the first refresh
    pub fn initial_region(&self) -> Region {
        match self {
            ElementId::ApiHealth
            | ElementId::RenderHealth
            | ElementId::StatTotal
            | ElementId::StatUpdated
            | ElementId::StatStorm
            | ElementId::StatRender => Region::Text("-".to_string()),
            ElementId::RegList | ElementId::ChangeList | ElementId::SearchList => Region::List(Vec::new()),
            ElementId::IngestResult => Region::Text(String::new()),
            ElementId::SeedInput | ElementId::SearchInput => Region::Input(String::new()),
            ElementId::RefreshBtn => Region::Button("Yenile".to_string()),
            ElementId::IngestBtn => Region::Button("Ingest Başlat".to_string()),
            ElementId::SearchBtn => Region::Button("Ara".to_string()),
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Region {
    Text(String),
    List(Vec<String>),
    Input(String),
    Button(String),
}

impl Region {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Region::Text(s) | Region::Input(s) | Region::Button(s) => Some(s),
            Region::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Region::List(lines) => Some(lines),
            _ => None,
        }
    }
}

/// Point-in-time copy of the whole document
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub regions: BTreeMap<ElementId, Region>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn get(&self, id: ElementId) -> Option<&Region> {
        self.regions.get(&id)
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.get(id).and_then(Region::as_text).unwrap_or_default()
    }

    pub fn list(&self, id: ElementId) -> &[String] {
        self.get(id).and_then(Region::as_list).unwrap_or_default()
    }
}

/// Shared, lock-guarded document
pub struct Document {
    regions: RwLock<BTreeMap<ElementId, Region>>,
    refreshed_at: RwLock<Option<DateTime<Utc>>>,
}

impl Document {
    /// Document as it looks before the first refresh
    pub fn new() -> Self {
        let regions = ElementId::ALL
            .into_iter()
            .map(|id| (id, id.initial_region()))
            .collect::<BTreeMap<_, _>>();

        Self {
            regions: RwLock::new(regions),
            refreshed_at: RwLock::new(None),
        }
    }

    pub async fn set_text(&self, id: ElementId, text: impl Into<String>) {
        self.regions.write().await.insert(id, Region::Text(text.into()));
    }

    pub async fn set_list(&self, id: ElementId, lines: Vec<String>) {
        self.regions.write().await.insert(id, Region::List(lines));
    }

    pub async fn set_input(&self, id: ElementId, value: impl Into<String>) {
        self.regions.write().await.insert(id, Region::Input(value.into()));
    }

    /// Clear `id` and render `rows` into it with `formatter`
    pub async fn fill_list<T, F>(&self, id: ElementId, rows: Option<&[T]>, formatter: F)
    where
        F: Fn(&T) -> String,
    {
        let lines = render::fill_list(rows, formatter);
        self.set_list(id, lines).await;
    }

    pub async fn get(&self, id: ElementId) -> Option<Region> {
        self.regions.read().await.get(&id).cloned()
    }

    pub async fn text(&self, id: ElementId) -> Option<String> {
        self.get(id).await.and_then(|r| r.as_text().map(str::to_string))
    }

    pub async fn list(&self, id: ElementId) -> Option<Vec<String>> {
        self.get(id).await.and_then(|r| r.as_list().map(<[String]>::to_vec))
    }

    pub async fn mark_refreshed(&self) {
        *self.refreshed_at.write().await = Some(Utc::now());
    }

    pub async fn snapshot(&self) -> Snapshot {
        Snapshot {
            regions: self.regions.read().await.clone(),
            refreshed_at: *self.refreshed_at.read().await,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
