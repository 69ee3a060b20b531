pub mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Autocomplete candidates keyed by exact column header label.
///
/// Lists keep their given order; loaded once and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceLists {
    lists: HashMap<String, Vec<String>>,
}

impl ReferenceLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// The aircraft-table lists: SVC, REG, TYPE, FROM, DEST and ADDRESSEE’S
    pub fn builtin() -> Self {
        builtin::BY_HEADER
            .iter()
            .map(|(header, items)| (*header, items.iter().copied()))
            .collect()
    }

    /// Candidates for `header`; an unmapped header has none.
    pub fn for_header(&self, header: &str) -> &[String] {
        self.lists.get(header).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl<H, I, S> FromIterator<(H, I)> for ReferenceLists
where
    H: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (H, I)>>(iter: T) -> Self {
        let lists = iter
            .into_iter()
            .map(|(header, items)| (header.into(), items.into_iter().map(Into::into).collect()))
            .collect();
        Self { lists }
    }
}
