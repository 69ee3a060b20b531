//! Live input normalization.
//!
//! Runs on every text change and rewrites the buffer so it only ever holds
//! characters the column role permits. Every function here is idempotent.

use crate::role::ColumnRole;
use crate::state::EditBuffer;

/// Normalize `buffer` for a cell of `role`
pub fn normalize(role: ColumnRole, buffer: &EditBuffer) -> EditBuffer {
    match role {
        ColumnRole::Sequence | ColumnRole::Numeric4 => digits_only(buffer),
        ColumnRole::Count => EditBuffer::at_end(digits_only(buffer).into_text()),
        ColumnRole::FreeText | ColumnRole::Addressee => uppercase(buffer),
        ColumnRole::Alpha4 => buffer.clone(),
    }
}

/// Drop every non-digit, caret stays after the last kept char it followed
pub fn digits_only(buffer: &EditBuffer) -> EditBuffer {
    buffer.rewrite(|c| c.is_ascii_digit().then_some(c))
}

pub fn uppercase(buffer: &EditBuffer) -> EditBuffer {
    buffer.rewrite(|c| c.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_strips_non_digits() {
        let out = normalize(ColumnRole::Numeric4, &EditBuffer::new("12:5", 4));
        assert_eq!(out.text(), "125");
        assert_eq!(out.cursor(), 3);
    }

    #[test]
    fn test_time_keeps_cursor_offset() {
        let out = normalize(ColumnRole::Numeric4, &EditBuffer::new("1259", 2));
        assert_eq!(out, EditBuffer::new("1259", 2));
    }

    #[test]
    fn test_sequence_accepts_digits_only() {
        let out = normalize(ColumnRole::Sequence, &EditBuffer::new("0x4", 3));
        assert_eq!(out.text(), "04");
        assert_eq!(out.cursor(), 2);
    }

    #[test]
    fn test_count_moves_cursor_to_end() {
        let out = normalize(ColumnRole::Count, &EditBuffer::new("1-23", 1));
        assert_eq!(out.text(), "123");
        assert_eq!(out.cursor(), 3);
    }

    #[test]
    fn test_free_text_uppercases_in_place() {
        let out = normalize(ColumnRole::FreeText, &EditBuffer::new("atc405", 3));
        assert_eq!(out.text(), "ATC405");
        assert_eq!(out.cursor(), 3);

        let out = normalize(ColumnRole::Addressee, &EditBuffer::new("dep/htda", 8));
        assert_eq!(out.text(), "DEP/HTDA");
    }

    #[test]
    fn test_alpha4_untouched_while_typing() {
        let buf = EditBuffer::new("om1", 2);
        assert_eq!(normalize(ColumnRole::Alpha4, &buf), buf);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let roles = [
            ColumnRole::Sequence,
            ColumnRole::Alpha4,
            ColumnRole::Numeric4,
            ColumnRole::Count,
            ColumnRole::FreeText,
            ColumnRole::Addressee,
        ];
        let inputs = ["", "12ab34", "omdb", "dep/htda", " 0 9 ", "ßx"];
        for role in roles {
            for input in inputs {
                let once = normalize(role, &EditBuffer::new(input, 2));
                let twice = normalize(role, &once);
                assert_eq!(once, twice, "{role:?} on {input:?}");
            }
        }
    }
}
