//! Inline autocomplete over a column's reference list.
//!
//! The first entry that starts with the query wins; failing that, the first
//! entry that contains it anywhere. List order is the only tie-break.

use serde::{Deserialize, Serialize};

/// A chosen candidate for the current cell text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Full reference entry; replaces the cell text on commit
    pub entry: String,
    /// Non-editable remainder shown after the typed text
    pub ghost: String,
}

/// Find the winning entry for `text` in `candidates`
pub fn find_match<'a>(candidates: &'a [String], text: &str) -> Option<&'a str> {
    if text.is_empty() {
        return None;
    }
    let query = text.to_uppercase();
    candidates
        .iter()
        .find(|item| item.starts_with(&query))
        .or_else(|| candidates.iter().find(|item| item.contains(&query)))
        .map(String::as_str)
}

/// Suggestion for `text`: the winning entry minus its first `len(query)` chars
pub fn suggest(candidates: &[String], text: &str) -> Option<Suggestion> {
    let entry = find_match(candidates, text)?;
    let typed = text.to_uppercase().chars().count();
    let ghost: String = entry.chars().skip(typed).collect();
    tracing::debug!(entry, ghost = ghost.as_str(), "autocomplete suggestion");
    Some(Suggestion {
        entry: entry.to_string(),
        ghost,
    })
}

/// Entry to write into a non-blank cell on Tab/Enter
pub fn completion<'a>(candidates: &'a [String], text: &str) -> Option<&'a str> {
    if text.trim().is_empty() {
        return None;
    }
    find_match(candidates, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prefix_beats_earlier_contains() {
        let items = list(&["XATC100", "ATC100", "BTC200"]);
        let s = suggest(&items, "ATC").unwrap();
        assert_eq!(s.entry, "ATC100");
        assert_eq!(s.ghost, "100");
    }

    #[test]
    fn test_prefix_priority() {
        let items = list(&["ATC100", "BTC200", "XATC100"]);
        assert_eq!(suggest(&items, "ATC").unwrap().ghost, "100");
    }

    #[test]
    fn test_contains_fallback() {
        let items = list(&["ZZZ", "AABBCC"]);
        let s = suggest(&items, "BB").unwrap();
        assert_eq!(s.entry, "AABBCC");
        assert_eq!(s.ghost, "BBCC");
        assert_eq!(completion(&items, "bb"), Some("AABBCC"));
    }

    #[test]
    fn test_first_in_list_order_wins() {
        let items = list(&["HTDA", "HTDO"]);
        assert_eq!(find_match(&items, "htd"), Some("HTDA"));
    }

    #[test]
    fn test_no_match() {
        let items = list(&["OMDB"]);
        assert_eq!(suggest(&items, "Q"), None);
        assert_eq!(suggest(&[], "OM"), None);
        assert_eq!(suggest(&items, ""), None);
    }

    #[test]
    fn test_exact_match_has_empty_ghost() {
        let items = list(&["OMDB"]);
        let s = suggest(&items, "omdb").unwrap();
        assert_eq!(s.ghost, "");
    }

    #[test]
    fn test_completion_skips_blank_text() {
        let items = list(&["  X"]);
        assert_eq!(completion(&items, "  "), None);
    }
}
