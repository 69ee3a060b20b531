use serde::{Deserialize, Serialize};

use super::selection::Direction;

/// Keyboard actions the table reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    /// Tab: accept suggestion, next cell in row
    CommitNext,
    /// Shift+Tab: accept suggestion, previous cell in row
    CommitPrevious,
    /// Enter: accept suggestion, same column next row
    CommitDown,
    /// Arrow keys
    Move(Direction),
    /// Left to the host
    None,
}

/// Key codes for the keys the table handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Tab,
    Char(char),
    Unknown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Unknown,
                }
            }
        }
    }
}

/// Modifier keys state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }
}

/// Maps a key and modifiers to an InputAction.
///
/// Arrow keys move focus whatever the modifiers; only Shift matters for Tab.
pub fn key_to_action(key: Key, modifiers: Modifiers) -> InputAction {
    match key {
        Key::ArrowUp => InputAction::Move(Direction::Up),
        Key::ArrowDown => InputAction::Move(Direction::Down),
        Key::ArrowLeft => InputAction::Move(Direction::Left),
        Key::ArrowRight => InputAction::Move(Direction::Right),

        Key::Tab if modifiers.shift => InputAction::CommitPrevious,
        Key::Tab => InputAction::CommitNext,
        Key::Enter => InputAction::CommitDown,

        Key::Char(_) | Key::Unknown => InputAction::None,
    }
}

/// Check if an action accepts the autocomplete suggestion
pub fn is_commit_action(action: &InputAction) -> bool {
    matches!(
        action,
        InputAction::CommitNext | InputAction::CommitPrevious | InputAction::CommitDown
    )
}
