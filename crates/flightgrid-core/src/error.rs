use thiserror::Error;

/// Errors returned to the host when it drives the editor with bad input.
///
/// User-visible soft states (a cleared code cell, an invalid sequence
/// marker) are not errors; they come back as outcome values.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("cell ({row}, {col}) is outside the grid")]
    CellOutOfBounds { row: usize, col: usize },

    #[error("sequence start {0} is outside 1..=999")]
    SequenceOutOfRange(u32),

    #[error("row has {found} cells but the layout has {expected} columns")]
    ColumnMismatch { expected: usize, found: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TableError {
    /// Stable code for the host side.
    pub fn code(&self) -> &'static str {
        match self {
            TableError::CellOutOfBounds { .. } => "CELL_OUT_OF_BOUNDS",
            TableError::SequenceOutOfRange(_) => "SEQUENCE_OUT_OF_RANGE",
            TableError::ColumnMismatch { .. } => "COLUMN_MISMATCH",
            TableError::InvalidConfig(_) | TableError::Json(_) => "INVALID_CONFIG",
            TableError::InvalidDate(_) => "INVALID_DATE",
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
