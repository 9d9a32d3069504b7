//! Formatting Helpers
//!
//! Pure functions from (possibly absent) view models to display text.

use crate::client::models::{HealthStatus, RecordSummary, StatsSnapshot};

pub const HEALTH_OK: &str = "Çalışıyor";
pub const HEALTH_ERROR: &str = "Hata";
pub const RENDER_ACTIVE: &str = "Aktif";
pub const RENDER_PASSIVE: &str = "Pasif";
pub const EMPTY_LIST: &str = "Kayıt yok.";
pub const INGEST_PENDING: &str = "Çalışıyor...";
pub const INGEST_FAILED: &str = "Ingest başarısız";

/// Health indicator text; anything but `status == "ok"` is an error
pub fn health_label(health: Option<&HealthStatus>) -> &'static str {
    match health {
        Some(h) if h.is_ok() => HEALTH_OK,
        _ => HEALTH_ERROR,
    }
}

/// Render-service toggle text
pub fn render_label(stats: Option<&StatsSnapshot>) -> &'static str {
    match stats {
        Some(s) if s.render_enabled == Some(true) => RENDER_ACTIVE,
        _ => RENDER_PASSIVE,
    }
}

/// Counter text; absent stats or an absent field show zero
pub fn stat_value(stats: Option<&StatsSnapshot>, field: fn(&StatsSnapshot) -> Option<u64>) -> String {
    stats.and_then(field).unwrap_or(0).to_string()
}

/// `id | vVERSION | title`
pub fn format_record(record: &RecordSummary) -> String {
    format!("{} | v{} | {}", record.id, record.version, record.title)
}

/// One line per row in input order, or a single placeholder line
/// when the rows are empty or absent.
pub fn fill_list<T, F>(rows: Option<&[T]>, formatter: F) -> Vec<String>
where
    F: Fn(&T) -> String,
{
    match rows {
        Some(rows) if !rows.is_empty() => rows.iter().map(formatter).collect(),
        _ => vec![EMPTY_LIST.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, version: u32, title: &str) -> RecordSummary {
        RecordSummary {
            id,
            version,
            title: title.to_string(),
        }
    }

    #[test]
    fn test_health_label() {
        let ok = HealthStatus { status: "ok".into() };
        let degraded = HealthStatus { status: "degraded".into() };
        assert_eq!(health_label(Some(&ok)), "Çalışıyor");
        assert_eq!(health_label(Some(&degraded)), "Hata");
        assert_eq!(health_label(None), "Hata");
    }

    #[test]
    fn test_stats_defaults() {
        assert_eq!(stat_value(None, |s| s.total_regulations), "0");
        assert_eq!(render_label(None), "Pasif");

        let stats = StatsSnapshot {
            total_regulations: Some(42),
            updated_regulations: Some(3),
            storm_urls: Some(0),
            render_enabled: Some(true),
        };
        assert_eq!(stat_value(Some(&stats), |s| s.total_regulations), "42");
        assert_eq!(stat_value(Some(&stats), |s| s.updated_regulations), "3");
        assert_eq!(render_label(Some(&stats)), "Aktif");
    }

    #[test]
    fn test_stats_fall_back_per_field() {
        let stats = StatsSnapshot {
            total_regulations: None,
            updated_regulations: Some(9),
            storm_urls: None,
            render_enabled: None,
        };
        assert_eq!(stat_value(Some(&stats), |s| s.total_regulations), "0");
        assert_eq!(stat_value(Some(&stats), |s| s.updated_regulations), "9");
        assert_eq!(render_label(Some(&stats)), "Pasif");
    }

    #[test]
    fn test_format_record() {
        assert_eq!(format_record(&record(12, 2, "İş Kanunu")), "12 | v2 | İş Kanunu");
    }

    #[test]
    fn test_fill_list_placeholder() {
        let empty: Vec<RecordSummary> = Vec::new();
        assert_eq!(fill_list(None::<&[RecordSummary]>, format_record), vec!["Kayıt yok."]);
        assert_eq!(fill_list(Some(empty.as_slice()), format_record), vec!["Kayıt yok."]);
    }

    #[test]
    fn test_fill_list_keeps_input_order() {
        let rows = vec![record(3, 1, "C"), record(1, 4, "A"), record(2, 2, "B")];
        let lines = fill_list(Some(rows.as_slice()), format_record);
        assert_eq!(lines, vec!["3 | v1 | C", "1 | v4 | A", "2 | v2 | B"]);
        assert_eq!(fill_list(Some(rows.as_slice()), format_record), lines);
    }
}
