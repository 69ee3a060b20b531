use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Class tag marking the sequence ("AIM") column.
pub const SEQUENCE_TAG: &str = "aim-cell";
/// Class tags marking passenger and freight count columns.
pub const COUNT_TAGS: [&str; 2] = ["pob-cell", "fr-cell"];
/// Class tags marking aerodrome code columns.
pub const ALPHA4_TAGS: [&str; 2] = ["from-cell", "dest-cell"];
/// Class tag marking the addressee column.
pub const ADDRESSEE_TAG: &str = "addressee-cell";

/// Formatting and validation policy bound to one grid column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Auto-numbered 001..999 wrap-around column
    Sequence,
    /// Strict four-letter code (aerodromes)
    Alpha4,
    /// HHMM time
    Numeric4,
    /// Non-negative integer
    Count,
    /// Uppercase free text
    FreeText,
    /// Prefixed addressee code, uppercase
    Addressee,
}

/// What a failed commit does to the cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitPolicy {
    /// Keep the text, raise the invalid marker
    MarkInvalidKeepText,
    /// Empty the cell
    ClearOnFail,
    /// Nothing to check
    Accept,
}

impl ColumnRole {
    pub fn commit_policy(self) -> CommitPolicy {
        match self {
            ColumnRole::Sequence => CommitPolicy::MarkInvalidKeepText,
            ColumnRole::Alpha4 | ColumnRole::Numeric4 => CommitPolicy::ClearOnFail,
            ColumnRole::Count | ColumnRole::FreeText | ColumnRole::Addressee => {
                CommitPolicy::Accept
            }
        }
    }

    pub fn is_sequence(self) -> bool {
        matches!(self, ColumnRole::Sequence)
    }
}

/// Structural markers a host cell exposes: class tags and input mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMarkers {
    pub classes: BTreeSet<String>,
    pub numeric: bool,
}

impl CellMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn with_numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn has(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn has_any(&self, classes: &[&str]) -> bool {
        classes.iter().any(|c| self.has(c))
    }

    /// Resolve the column role from the markers.
    ///
    /// Sequence and count tags win over the numeric input mode, so those
    /// columns never get time validation.
    pub fn classify(&self) -> ColumnRole {
        if self.has(SEQUENCE_TAG) {
            ColumnRole::Sequence
        } else if self.has_any(&COUNT_TAGS) {
            ColumnRole::Count
        } else if self.has_any(&ALPHA4_TAGS) {
            ColumnRole::Alpha4
        } else if self.has(ADDRESSEE_TAG) {
            ColumnRole::Addressee
        } else if self.numeric {
            ColumnRole::Numeric4
        } else {
            ColumnRole::FreeText
        }
    }
}

/// One column of the table, fixed once the header row is read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Header label, trimmed; used for reference list lookup
    pub header: String,
    pub markers: CellMarkers,
    pub role: ColumnRole,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>, markers: CellMarkers) -> Self {
        let role = markers.classify();
        Self {
            header: header.into().trim().to_string(),
            markers,
            role,
        }
    }
}

/// Ordered column definitions shared by every row of a grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    columns: Vec<ColumnSpec>,
}

impl ColumnLayout {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, col: usize) -> Option<&ColumnSpec> {
        self.columns.get(col)
    }

    pub fn role(&self, col: usize) -> Option<ColumnRole> {
        self.columns.get(col).map(|c| c.role)
    }

    pub fn header(&self, col: usize) -> Option<&str> {
        self.columns.get(col).map(|c| c.header.as_str())
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Indices of every sequence column, left to right
    pub fn sequence_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.role.is_sequence())
            .map(|(i, _)| i)
    }

    /// Layout of the inbound and outbound aircraft tables.
    pub fn aircraft_table() -> Self {
        let free = CellMarkers::new;
        let time = || CellMarkers::new().with_numeric(true);
        Self::new(vec![
            ColumnSpec::new("AIM", CellMarkers::new().with_class(SEQUENCE_TAG).with_numeric(true)),
            ColumnSpec::new("SVC", free()),
            ColumnSpec::new("REG", free()),
            ColumnSpec::new("TYPE", free()),
            ColumnSpec::new("FROM", CellMarkers::new().with_class("from-cell")),
            ColumnSpec::new("SKED", time()),
            ColumnSpec::new("ATC", time()),
            ColumnSpec::new("ETA", time()),
            ColumnSpec::new("DEST", CellMarkers::new().with_class("dest-cell")),
            ColumnSpec::new("EET", time()),
            ColumnSpec::new("ETA EDZ", time()),
            ColumnSpec::new("EOBT", time()),
            ColumnSpec::new("ATD", time()),
            ColumnSpec::new("POB", CellMarkers::new().with_class("pob-cell").with_numeric(true)),
            ColumnSpec::new("FR", CellMarkers::new().with_class("fr-cell").with_numeric(true)),
            ColumnSpec::new(
                "ADDRESSEE\u{2019}S",
                CellMarkers::new().with_class(ADDRESSEE_TAG),
            ),
            ColumnSpec::new("REMARKS", free()),
        ])
    }
}
