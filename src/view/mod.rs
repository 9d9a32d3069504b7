//! Dashboard View
//!
//! The in-memory document the dashboard writes into, the pure
//! formatting helpers that produce its contents, and the HTML page and
//! terminal reports rendered from it.

pub mod document;
pub mod html;
pub mod render;
pub mod report;

pub use document::{Document, ElementId, Region, Snapshot};
pub use html::{render_page, DashboardPage};
pub use render::{fill_list, format_record, health_label, render_label};
pub use report::{write_snapshot, OutputFormat, Section};
