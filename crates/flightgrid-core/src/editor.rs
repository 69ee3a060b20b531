use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::Arc;

use crate::autocomplete;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::export::AppendControl;
use crate::grid::{Cell, Grid};
use crate::normalize::normalize;
use crate::role::ColumnLayout;
use crate::rows;
use crate::sequence;
use crate::state::{
    is_commit_action, key_to_action, CellPosition, Direction, EditBuffer, GhostState,
    InputAction, Key, Modifiers,
};
use crate::validation;

/// Cell state after a text change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputOutcome {
    pub text: String,
    pub cursor: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ghost: Option<String>,
}

/// Cell state after focus loss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitOutcome {
    pub position: CellPosition,
    pub text: String,
    pub valid: bool,
    /// Other cells rewritten by the commit (sequence renumbering)
    pub updated: Vec<CellPosition>,
}

/// Result of a keydown in a cell
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyOutcome {
    /// The host should suppress the key's default behaviour
    pub handled: bool,
    /// Full reference entry written into the cell by Tab/Enter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<String>,
    /// Commit of the cell being left
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed: Option<CommitOutcome>,
    /// Cell that should receive focus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<CellPosition>,
}

/// Editing state of one aircraft table.
///
/// Every event handler runs to completion and leaves the grid consistent;
/// the only errors are positions outside the grid.
#[derive(Debug, Clone)]
pub struct TableEditor {
    grid: Grid,
    config: Arc<EditorConfig>,
    focus: Option<CellPosition>,
    append_control: AppendControl,
}

impl TableEditor {
    pub fn new(layout: ColumnLayout, config: Arc<EditorConfig>) -> Self {
        Self::with_grid(Grid::new(layout), config)
    }

    pub fn with_grid(grid: Grid, config: Arc<EditorConfig>) -> Self {
        Self {
            grid,
            config,
            focus: None,
            append_control: AppendControl::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn cell(&self, pos: CellPosition) -> Result<&Cell> {
        self.grid.cell(pos)
    }

    pub fn focused(&self) -> Option<CellPosition> {
        self.focus
    }

    pub fn append_control(&self) -> &AppendControl {
        &self.append_control
    }

    pub fn append_control_mut(&mut self) -> &mut AppendControl {
        &mut self.append_control
    }

    fn candidates(&self, pos: CellPosition) -> Result<&[String]> {
        let header = self.grid.header(pos)?;
        Ok(self.config.reference_lists.for_header(header))
    }

    /// Move focus to `pos`, committing the cell being left
    pub fn focus(&mut self, pos: CellPosition) -> Result<Option<CommitOutcome>> {
        self.grid.cell(pos)?;
        let previous = self.focus;
        let left = match previous {
            Some(prev) if prev != pos => Some(self.blur(prev)?),
            _ => None,
        };
        self.focus = Some(pos);
        Ok(left)
    }

    /// Text changed in `pos`: normalize, refresh validity and suggestion
    pub fn input(&mut self, pos: CellPosition, buffer: EditBuffer) -> Result<InputOutcome> {
        let role = self.grid.role(pos)?;
        let normalized = normalize(role, &buffer);
        let valid = validation::is_valid_live(role, normalized.text());
        let ghost = match autocomplete::suggest(self.candidates(pos)?, normalized.text()) {
            Some(suggestion) => GhostState::Suggesting {
                ghost: suggestion.ghost,
            },
            None => GhostState::Idle,
        };

        let cell = self.grid.cell_mut(pos)?;
        cell.text = normalized.text().to_string();
        cell.valid = valid;
        cell.ghost = ghost;
        self.focus = Some(pos);

        Ok(InputOutcome {
            text: cell.text.clone(),
            cursor: normalized.cursor(),
            valid,
            ghost: cell.ghost.ghost().map(str::to_string),
        })
    }

    /// Focus left `pos`: drop the suggestion and validate the text
    pub fn blur(&mut self, pos: CellPosition) -> Result<CommitOutcome> {
        let role = self.grid.role(pos)?;
        let cell = self.grid.cell_mut(pos)?;
        cell.ghost.clear();
        let validated = validation::commit(role, &cell.text);
        cell.text = validated.text;
        cell.valid = validated.valid;

        let mut updated = Vec::new();
        if let Some(start) = validated.reseed {
            updated = sequence::renumber(&mut self.grid, start)?;
            updated.retain(|p| *p != pos);
        }
        if self.focus == Some(pos) {
            self.focus = None;
        }

        let cell = self.grid.cell(pos)?;
        tracing::debug!(row = pos.row, col = pos.col, ?role, valid = cell.valid, "cell committed");
        Ok(CommitOutcome {
            position: pos,
            text: cell.text.clone(),
            valid: cell.valid,
            updated,
        })
    }

    /// Keydown in `pos`: Tab/Enter accept the suggestion and move on,
    /// arrows move focus. Anything else is left to the host.
    pub fn key_down(
        &mut self,
        pos: CellPosition,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<KeyOutcome> {
        self.grid.cell(pos)?;
        let action = key_to_action(key, modifiers);

        let (direction, always_commit) = match action {
            InputAction::None => return Ok(KeyOutcome::default()),
            InputAction::Move(direction) => (direction, false),
            InputAction::CommitNext => (Direction::Right, true),
            InputAction::CommitPrevious => (Direction::Left, true),
            InputAction::CommitDown => (Direction::Down, false),
        };

        let mut outcome = KeyOutcome {
            handled: true,
            ..KeyOutcome::default()
        };

        if is_commit_action(&action) {
            outcome.completed = self.complete(pos)?;
        }

        let target = self.grid.neighbor(pos, direction);
        if target.is_some() || always_commit {
            outcome.committed = Some(self.blur(pos)?);
        }
        match target {
            Some(target) => {
                self.focus = Some(target);
                outcome.focus = Some(target);
            }
            // committed in place: the caret stays in the cell
            None if always_commit => self.focus = Some(pos),
            None => {}
        }
        Ok(outcome)
    }

    /// Replace a non-blank cell's text with its winning reference entry
    fn complete(&mut self, pos: CellPosition) -> Result<Option<String>> {
        let text = self.grid.cell(pos)?.text.clone();
        let entry = match autocomplete::completion(self.candidates(pos)?, &text) {
            Some(entry) => entry.to_string(),
            None => return Ok(None),
        };
        let cell = self.grid.cell_mut(pos)?;
        cell.text = entry.clone();
        cell.ghost.clear();
        Ok(Some(entry))
    }

    /// Append the configured batch of rows; returns the new row indices
    pub fn append_rows(&mut self) -> Range<usize> {
        rows::append_rows(&mut self.grid, self.config.rows_per_append)
    }
}
