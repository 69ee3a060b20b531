pub mod autocomplete;
pub mod calendar;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod grid;
pub mod normalize;
pub mod reference;
pub mod role;
pub mod rows;
pub mod sequence;
pub mod state;
pub mod validation;

pub use autocomplete::{find_match, suggest, Suggestion};
pub use calendar::{day_label, DateDay, DaySelectors, Side};
pub use config::EditorConfig;
pub use editor::{CommitOutcome, InputOutcome, KeyOutcome, TableEditor};
pub use error::{Result, TableError};
pub use export::{snapshot_filename, AppendControl, OfflineManifest, SnapshotGuard};
pub use grid::{Cell, Grid, Row};
pub use reference::ReferenceLists;
pub use role::{CellMarkers, ColumnLayout, ColumnRole, ColumnSpec, CommitPolicy};
pub use state::{CellPosition, Direction, EditBuffer, GhostState, InputAction, Key, Modifiers};
pub use validation::Validated;
