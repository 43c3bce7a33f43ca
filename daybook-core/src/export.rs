//! Month export.
//!
//! An export is a suggested filename plus bytes. Where the bytes end up is
//! decided by an [`ExportSink`].

use std::path::PathBuf;

use chrono::Datelike;
use tracing::info;

use crate::error::DaybookResult;
use crate::event::Event;
use crate::grid::{first_of_month, normalize_month};

/// A file ready to hand to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Delivers an export somewhere the user can get at it.
pub trait ExportSink {
    /// Returns where the export was written.
    fn deliver(&self, export: &Export) -> DaybookResult<PathBuf>;
}

/// Writes exports into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&self, export: &Export) -> DaybookResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(&export.filename);
        std::fs::write(&path, &export.bytes)?;

        info!(path = %path.display(), bytes = export.bytes.len(), "exported events");
        Ok(path)
    }
}

/// Suggested filename for a month export (e.g. "calendar-events-2024-03.json")
pub fn export_filename(year: i32, month: i32) -> String {
    format!(
        "calendar-events-{}.json",
        first_of_month(year, month).format("%Y-%m")
    )
}

/// Events dated within a zero-based month, in collection order.
pub fn events_in_month(events: &[Event], year: i32, month: i32) -> Vec<&Event> {
    let (year, month) = normalize_month(year, month);
    events
        .iter()
        .filter(|e| e.date.year() == year && e.date.month0() == month)
        .collect()
}

/// Serialize one month's events as indented JSON.
pub fn month_export(events: &[Event], year: i32, month: i32) -> DaybookResult<Export> {
    let selected = events_in_month(events, year, month);

    Ok(Export {
        filename: export_filename(year, month),
        bytes: serde_json::to_vec_pretty(&selected)?,
    })
}
