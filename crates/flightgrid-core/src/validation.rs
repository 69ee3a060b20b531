use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::role::{ColumnRole, CommitPolicy};
use crate::sequence;

static AERODROME_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}$").expect("static pattern"));
static FOUR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("static pattern"));

/// Result of committing a cell on focus loss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validated {
    /// Text the cell holds after the commit
    pub text: String,
    pub valid: bool,
    /// Set when a sequence commit should renumber the column from this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reseed: Option<u32>,
}

impl Validated {
    fn accept(text: String) -> Self {
        Self {
            text,
            valid: true,
            reseed: None,
        }
    }

    fn reject(role: ColumnRole, text: &str) -> Self {
        let text = match role.commit_policy() {
            CommitPolicy::ClearOnFail => String::new(),
            CommitPolicy::MarkInvalidKeepText | CommitPolicy::Accept => text.to_string(),
        };
        Self {
            text,
            valid: false,
            reseed: None,
        }
    }
}

/// Live validity of a cell's text, recomputed on every keystroke.
///
/// Only sequence cells show an invalid marker while typing.
pub fn is_valid_live(role: ColumnRole, text: &str) -> bool {
    match role {
        ColumnRole::Sequence => sequence::parse_committed(text).is_some(),
        _ => true,
    }
}

/// Validate `text` for a cell of `role` on commit.
///
/// A blank code or time cell is left blank and stays valid.
pub fn commit(role: ColumnRole, text: &str) -> Validated {
    match role {
        ColumnRole::Alpha4 | ColumnRole::Numeric4 if text.is_empty() => {
            Validated::accept(String::new())
        }
        ColumnRole::Sequence => match sequence::parse_committed(text) {
            Some(value) => Validated {
                text: sequence::format_value(value),
                valid: true,
                reseed: Some(value),
            },
            None => Validated::reject(role, text),
        },
        ColumnRole::Alpha4 => {
            let upper = text.to_uppercase();
            if AERODROME_CODE.is_match(&upper) {
                Validated::accept(upper)
            } else {
                Validated::reject(role, text)
            }
        }
        ColumnRole::Numeric4 => {
            if is_valid_time(text) {
                Validated::accept(text.to_string())
            } else {
                Validated::reject(role, text)
            }
        }
        ColumnRole::Count | ColumnRole::FreeText | ColumnRole::Addressee => {
            Validated::accept(text.to_string())
        }
    }
}

/// HHMM with hours 00-23 and minutes 00-59
pub fn is_valid_time(text: &str) -> bool {
    if !FOUR_DIGITS.is_match(text) {
        return false;
    }
    let (hours, minutes) = text.split_at(2);
    match (hours.parse::<u8>(), minutes.parse::<u8>()) {
        (Ok(h), Ok(m)) => h <= 23 && m <= 59,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_commit_pads() {
        for (input, expected) in [("1", "001"), ("42", "042"), ("999", "999"), ("007", "007")] {
            let out = commit(ColumnRole::Sequence, input);
            assert_eq!(out.text, expected);
            assert!(out.valid);
            assert!(out.reseed.is_some());
        }
    }

    #[test]
    fn test_sequence_commit_keeps_invalid_text() {
        for input in ["0", "1000", "", "12a", "0000"] {
            let out = commit(ColumnRole::Sequence, input);
            assert_eq!(out.text, input);
            assert!(!out.valid);
            assert_eq!(out.reseed, None);
        }
    }

    #[test]
    fn test_alpha4_commit() {
        assert_eq!(commit(ColumnRole::Alpha4, "omdb").text, "OMDB");
        assert!(commit(ColumnRole::Alpha4, "omdb").valid);

        let short = commit(ColumnRole::Alpha4, "omd");
        assert_eq!(short.text, "");
        assert!(!short.valid);

        assert_eq!(commit(ColumnRole::Alpha4, "om1b").text, "");
        assert_eq!(commit(ColumnRole::Alpha4, "omdbx").text, "");
    }

    #[test]
    fn test_time_commit() {
        assert_eq!(commit(ColumnRole::Numeric4, "1259").text, "1259");
        assert_eq!(commit(ColumnRole::Numeric4, "0000").text, "0000");
        assert_eq!(commit(ColumnRole::Numeric4, "2359").text, "2359");
        assert_eq!(commit(ColumnRole::Numeric4, "2460").text, "");
        assert_eq!(commit(ColumnRole::Numeric4, "2400").text, "");
        assert_eq!(commit(ColumnRole::Numeric4, "0160").text, "");
        assert_eq!(commit(ColumnRole::Numeric4, "123").text, "");
        assert_eq!(commit(ColumnRole::Numeric4, "12345").text, "");
    }

    #[test]
    fn test_exempt_roles_pass_through() {
        assert_eq!(commit(ColumnRole::Count, "123").text, "123");
        assert_eq!(commit(ColumnRole::Count, "7").text, "7");
        assert_eq!(commit(ColumnRole::FreeText, "5HTCA").text, "5HTCA");
        assert!(commit(ColumnRole::Addressee, "").valid);
    }

    #[test]
    fn test_blank_code_and_time_cells_stay_valid() {
        assert_eq!(commit(ColumnRole::Alpha4, ""), Validated::accept(String::new()));
        assert_eq!(commit(ColumnRole::Numeric4, ""), Validated::accept(String::new()));
    }

    #[test]
    fn test_live_validity() {
        assert!(is_valid_live(ColumnRole::Sequence, "12"));
        assert!(!is_valid_live(ColumnRole::Sequence, "0"));
        assert!(!is_valid_live(ColumnRole::Sequence, ""));
        assert!(is_valid_live(ColumnRole::Numeric4, "99"));
    }
}
