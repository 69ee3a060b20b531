//! Support for the static snapshot export and offline caching.
//!
//! The host serializes the page itself; the core names the file and keeps
//! the append controls out of the serialized markup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::editor::TableEditor;

/// `DD_MON_YYYY_index.html`, e.g. `19_OCT_2026_index.html`
pub fn snapshot_filename(date: NaiveDate) -> String {
    let stamp = date.format("%d_%b_%Y").to_string().to_uppercase();
    format!("{stamp}_index.html")
}

/// The "+" button under a table that appends rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendControl {
    visible: bool,
}

impl Default for AppendControl {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl AppendControl {
    pub const LABEL: &'static str = "+";

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }
}

/// Hides every table's append control until dropped
pub struct SnapshotGuard<'a> {
    editors: &'a mut [TableEditor],
    filename: String,
}

impl<'a> SnapshotGuard<'a> {
    pub fn begin(editors: &'a mut [TableEditor], date: NaiveDate) -> Self {
        for editor in editors.iter_mut() {
            editor.append_control_mut().hide();
        }
        let filename = snapshot_filename(date);
        tracing::debug!(filename = filename.as_str(), tables = editors.len(), "snapshot started");
        Self { editors, filename }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn editors(&self) -> &[TableEditor] {
        &*self.editors
    }
}

impl Drop for SnapshotGuard<'_> {
    fn drop(&mut self) {
        for editor in self.editors.iter_mut() {
            editor.append_control_mut().show();
        }
    }
}

/// Page assets the host caches for offline viewing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfflineManifest {
    pub cache_name: String,
    pub assets: Vec<String>,
}

impl Default for OfflineManifest {
    fn default() -> Self {
        Self {
            cache_name: "aircraft-table-v1".to_string(),
            assets: [
                "/",
                "/index.html",
                "/styles.css",
                "/script.js",
                "/SFPRODISPLAY-REGULAR.TTF",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}
