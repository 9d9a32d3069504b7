//! Dashboard Page
//!
//! Server-side rendering of a [`Snapshot`] into the dashboard HTML page
//! through the `templates/dashboard.html` askama template. Every element
//! carries its DOM id so the page keeps the same element contract as the
//! browser client. Askama escapes all interpolated backend text.

use askama::Template;

use super::document::{ElementId, Snapshot};

const TITLE: &str = "Regülasyon Bilgi Platformu";

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage<'a> {
    title: &'a str,
    api_health: &'a str,
    render_health: &'a str,
    refresh_btn: &'a str,
    refreshed_at: String,
    stat_total: &'a str,
    stat_updated: &'a str,
    stat_storm: &'a str,
    stat_render: &'a str,
    seed_input: &'a str,
    ingest_btn: &'a str,
    ingest_result: &'a str,
    search_input: &'a str,
    search_btn: &'a str,
    search_list: &'a [String],
    reg_list: &'a [String],
    change_list: &'a [String],
}

impl<'a> DashboardPage<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            title: TITLE,
            api_health: snapshot.text(ElementId::ApiHealth),
            render_health: snapshot.text(ElementId::RenderHealth),
            refresh_btn: snapshot.text(ElementId::RefreshBtn),
            refreshed_at: snapshot
                .refreshed_at
                .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_default(),
            stat_total: snapshot.text(ElementId::StatTotal),
            stat_updated: snapshot.text(ElementId::StatUpdated),
            stat_storm: snapshot.text(ElementId::StatStorm),
            stat_render: snapshot.text(ElementId::StatRender),
            seed_input: snapshot.text(ElementId::SeedInput),
            ingest_btn: snapshot.text(ElementId::IngestBtn),
            ingest_result: snapshot.text(ElementId::IngestResult),
            search_input: snapshot.text(ElementId::SearchInput),
            search_btn: snapshot.text(ElementId::SearchBtn),
            search_list: snapshot.list(ElementId::SearchList),
            reg_list: snapshot.list(ElementId::RegList),
            change_list: snapshot.list(ElementId::ChangeList),
        }
    }
}

/// Render the full dashboard page
pub fn render_page(snapshot: &Snapshot) -> Result<String, askama::Error> {
    DashboardPage::new(snapshot).render()
}
