pub mod edit;
pub mod input;
pub mod selection;

pub use edit::{EditBuffer, GhostState};
pub use input::{is_commit_action, key_to_action, InputAction, Key, Modifiers};
pub use selection::{CellPosition, Direction};
