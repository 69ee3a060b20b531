use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::role::{ColumnLayout, ColumnRole};
use crate::state::{CellPosition, Direction, GhostState};

/// One editable cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub valid: bool,
    #[serde(default)]
    pub ghost: GhostState,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            valid: true,
            ghost: GhostState::Idle,
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new()
        }
    }
}

/// A row of cells aligned by index to the column layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn blank(width: usize) -> Self {
        Self {
            cells: (0..width).map(|_| Cell::new()).collect(),
        }
    }
}

/// Body rows of one table plus its fixed column layout.
///
/// The header row lives in the layout, not in `rows`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    layout: ColumnLayout,
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(layout: ColumnLayout) -> Self {
        Self {
            layout,
            rows: Vec::new(),
        }
    }

    /// Build a grid from existing row texts (e.g. a reopened snapshot)
    pub fn from_texts(layout: ColumnLayout, rows: Vec<Vec<String>>) -> Result<Self> {
        let width = layout.len();
        let rows = rows
            .into_iter()
            .map(|texts| {
                if texts.len() != width {
                    return Err(TableError::ColumnMismatch {
                        expected: width,
                        found: texts.len(),
                    });
                }
                Ok(Row {
                    cells: texts.into_iter().map(Cell::with_text).collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { layout, rows })
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.layout.len()
    }

    pub fn role(&self, pos: CellPosition) -> Result<ColumnRole> {
        self.check(pos)?;
        self.layout
            .role(pos.col)
            .ok_or(TableError::CellOutOfBounds {
                row: pos.row,
                col: pos.col,
            })
    }

    /// Header label of the cell's column, as autocomplete sees it
    pub fn header(&self, pos: CellPosition) -> Result<&str> {
        self.check(pos)?;
        Ok(self.layout.header(pos.col).unwrap_or_default())
    }

    pub fn cell(&self, pos: CellPosition) -> Result<&Cell> {
        self.rows
            .get(pos.row)
            .and_then(|r| r.cells.get(pos.col))
            .ok_or(TableError::CellOutOfBounds {
                row: pos.row,
                col: pos.col,
            })
    }

    pub fn cell_mut(&mut self, pos: CellPosition) -> Result<&mut Cell> {
        self.rows
            .get_mut(pos.row)
            .and_then(|r| r.cells.get_mut(pos.col))
            .ok_or(TableError::CellOutOfBounds {
                row: pos.row,
                col: pos.col,
            })
    }

    pub fn contains(&self, pos: CellPosition) -> bool {
        pos.row < self.row_count() && pos.col < self.col_count()
    }

    fn check(&self, pos: CellPosition) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(TableError::CellOutOfBounds {
                row: pos.row,
                col: pos.col,
            })
        }
    }

    /// Adjacent cell in `direction`, `None` at the grid edge
    pub fn neighbor(&self, pos: CellPosition, direction: Direction) -> Option<CellPosition> {
        pos.step(direction, self.row_count(), self.col_count())
    }

    /// Positions of every sequence cell in row-major order
    pub fn sequence_cells(&self) -> Vec<CellPosition> {
        let cols: Vec<usize> = self.layout.sequence_columns().collect();
        (0..self.row_count())
            .flat_map(|row| cols.iter().map(move |&col| CellPosition::new(row, col)))
            .collect()
    }

    pub(crate) fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}
