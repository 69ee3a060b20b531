use serde::{Deserialize, Serialize};

/// Cell text paired with a caret offset.
///
/// The cursor counts chars, not bytes, and never exceeds the text length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let cursor = cursor.min(text.chars().count());
        Self { text, cursor }
    }

    /// Buffer with the caret after the last character
    pub fn at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Rewrite every char through `f`, keeping the caret behind the output
    /// of the chars that preceded it.
    pub fn rewrite<F, I>(&self, mut f: F) -> Self
    where
        F: FnMut(char) -> I,
        I: IntoIterator<Item = char>,
    {
        let mut text = String::with_capacity(self.text.len());
        let mut cursor = 0;
        for (i, c) in self.text.chars().enumerate() {
            let before = text.len();
            text.extend(f(c));
            if i < self.cursor {
                cursor += text[before..].chars().count();
            }
        }
        Self { text, cursor }
    }
}

/// Autocomplete display state of one cell
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GhostState {
    #[default]
    Idle,
    Suggesting { ghost: String },
}

impl GhostState {
    pub fn ghost(&self) -> Option<&str> {
        match self {
            GhostState::Idle => None,
            GhostState::Suggesting { ghost } => Some(ghost),
        }
    }

    pub fn is_suggesting(&self) -> bool {
        matches!(self, GhostState::Suggesting { .. })
    }

    pub fn clear(&mut self) {
        *self = GhostState::Idle;
    }
}
