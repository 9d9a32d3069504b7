//! Text Reports
//!
//! Terminal rendering of a [`Snapshot`] for the CLI, as an aligned table
//! or pretty JSON. Output goes to any [`Write`] so the same code serves
//! stdout and tests.

use clap::ValueEnum;
use serde_json::{json, Map};
use std::io::{self, Write};

use super::document::{ElementId, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// A titled group of elements in a report
#[derive(Debug, Clone, Copy)]
pub enum Section {
    /// Label and element pairs shown on one line each
    Fields(&'static [(ElementId, &'static str)]),
    Text(ElementId, &'static str),
    List(ElementId, &'static str),
}

impl Section {
    pub fn ids(&self) -> Vec<ElementId> {
        match self {
            Section::Fields(fields) => fields.iter().map(|(id, _)| *id).collect(),
            Section::Text(id, _) | Section::List(id, _) => vec![*id],
        }
    }
}

pub const REFRESH_SECTIONS: [Section; 4] = [
    Section::Fields(&[
        (ElementId::ApiHealth, "API"),
        (ElementId::RenderHealth, "Render servisi"),
    ]),
    Section::Fields(&[
        (ElementId::StatTotal, "Toplam regülasyon"),
        (ElementId::StatUpdated, "Güncellenen"),
        (ElementId::StatStorm, "StormCrawler URL"),
        (ElementId::StatRender, "Render"),
    ]),
    Section::List(ElementId::RegList, "Son regülasyonlar"),
    Section::List(ElementId::ChangeList, "Son değişiklikler"),
];

pub const SEARCH_SECTIONS: [Section; 1] = [Section::List(ElementId::SearchList, "Arama sonuçları")];

/// Ingest result first, then the refreshed dashboard
pub fn ingest_sections() -> Vec<Section> {
    let mut sections = vec![Section::Text(ElementId::IngestResult, "Ingest")];
    sections.extend_from_slice(&REFRESH_SECTIONS);
    sections
}

/// Write `sections` of `snapshot` to `out` in `format`
pub fn write_snapshot<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    format: OutputFormat,
    sections: &[Section],
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, snapshot, sections),
        OutputFormat::Table => write_table(out, snapshot, sections),
    }
}

fn write_json<W: Write>(out: &mut W, snapshot: &Snapshot, sections: &[Section]) -> io::Result<()> {
    let mut regions = Map::new();
    for id in sections.iter().flat_map(Section::ids) {
        if let Some(region) = snapshot.get(id) {
            regions.insert(id.to_string(), serde_json::to_value(region)?);
        }
    }

    let report = json!({
        "regions": regions,
        "refreshed_at": snapshot.refreshed_at,
    });
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

fn write_table<W: Write>(out: &mut W, snapshot: &Snapshot, sections: &[Section]) -> io::Result<()> {
    for section in sections {
        match section {
            Section::Fields(fields) => {
                let width = fields.iter().map(|(_, label)| label.chars().count()).max().unwrap_or(0);
                for (id, label) in fields.iter() {
                    let pad = width - label.chars().count();
                    writeln!(out, "{}{}  {}", label, " ".repeat(pad), snapshot.text(*id))?;
                }
            }
            Section::Text(id, title) => {
                writeln!(out, "{}:", title)?;
                for line in snapshot.text(*id).lines() {
                    writeln!(out, "  {}", line)?;
                }
            }
            Section::List(id, title) => {
                writeln!(out, "{}:", title)?;
                for line in snapshot.list(*id) {
                    writeln!(out, "  - {}", line)?;
                }
            }
        }
        writeln!(out)?;
    }

    if let Some(at) = snapshot.refreshed_at {
        writeln!(out, "Son yenileme: {}", at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::document::Document;
    use serde_json::Value;

    async fn sample() -> Snapshot {
        let doc = Document::new();
        doc.set_text(ElementId::ApiHealth, "Çalışıyor").await;
        doc.set_text(ElementId::RenderHealth, "Hata").await;
        doc.set_text(ElementId::StatTotal, "120").await;
        doc.set_text(ElementId::StatUpdated, "4").await;
        doc.set_text(ElementId::StatStorm, "37").await;
        doc.set_text(ElementId::StatRender, "Aktif").await;
        doc.set_list(ElementId::RegList, vec!["9 | v1 | Kira Yönetmeliği".into()]).await;
        doc.set_list(ElementId::ChangeList, vec!["Kayıt yok.".into()]).await;
        doc.set_text(ElementId::IngestResult, "{\n  \"processed\": 5\n}").await;
        doc.snapshot().await
    }

    fn render(snapshot: &Snapshot, format: OutputFormat, sections: &[Section]) -> String {
        let mut out = Vec::new();
        write_snapshot(&mut out, snapshot, format, sections).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_table_aligns_fields_and_lists_rows() {
        let text = render(&sample().await, OutputFormat::Table, &REFRESH_SECTIONS);

        assert!(text.starts_with("API             Çalışıyor\nRender servisi  Hata\n\n"));
        assert!(text.contains("Toplam regülasyon  120\n"));
        assert!(text.contains("StormCrawler URL   37\n"));
        assert!(text.contains("Render             Aktif\n"));
        assert!(text.contains("Son regülasyonlar:\n  - 9 | v1 | Kira Yönetmeliği\n"));
        assert!(text.contains("Son değişiklikler:\n  - Kayıt yok.\n"));
        assert!(!text.contains("Son yenileme"));
    }

    #[tokio::test]
    async fn test_table_ingest_result_comes_first_and_indented() {
        let text = render(&sample().await, OutputFormat::Table, &ingest_sections());

        assert!(text.starts_with("Ingest:\n  {\n    \"processed\": 5\n  }\n\nAPI "));
    }

    #[tokio::test]
    async fn test_json_holds_only_requested_regions() {
        let text = render(&sample().await, OutputFormat::Json, &SEARCH_SECTIONS);
        let value: Value = serde_json::from_str(&text).unwrap();

        let regions = value["regions"].as_object().unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions["searchList"]["kind"], "list");
        assert_eq!(regions["searchList"]["value"], json!([]));
        assert!(value["refreshed_at"].is_null());
    }

    #[tokio::test]
    async fn test_json_keeps_section_order() {
        let text = render(&sample().await, OutputFormat::Json, &ingest_sections());
        let value: Value = serde_json::from_str(&text).unwrap();

        let keys: Vec<&str> = value["regions"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            vec![
                "ingestResult",
                "apiHealth",
                "renderHealth",
                "statTotal",
                "statUpdated",
                "statStorm",
                "statRender",
                "regList",
                "changeList",
            ]
        );
        assert_eq!(value["regions"]["statRender"]["value"], "Aktif");
    }

    #[tokio::test]
    async fn test_refresh_time_printed_last() {
        let doc = Document::new();
        doc.mark_refreshed().await;
        let text = render(&doc.snapshot().await, OutputFormat::Table, &SEARCH_SECTIONS);

        assert!(text.starts_with("Arama sonuçları:\n\nSon yenileme: "));
        assert!(text.trim_end().ends_with("UTC"));
    }
}
