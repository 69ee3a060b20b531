//! Wrap-around sequence numbering for the AIM column.
//!
//! Values cycle 001..=999 then restart at 001.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, TableError};
use crate::grid::Grid;
use crate::state::CellPosition;

static COMMITTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}$").expect("static pattern"));

pub const SEQUENCE_MIN: u32 = 1;
pub const SEQUENCE_MAX: u32 = 999;

/// Value following `value`, wrapping 999 back to 1
pub fn next_value(value: u32) -> u32 {
    (value % SEQUENCE_MAX) + 1
}

/// Three-digit zero-padded display form
pub fn format_value(value: u32) -> String {
    format!("{:03}", value)
}

/// Whether `text` is a committable sequence value: 1-3 digits in 1..=999
pub fn parse_committed(text: &str) -> Option<u32> {
    if !COMMITTED.is_match(text) {
        return None;
    }
    text.parse::<u32>()
        .ok()
        .filter(|v| (SEQUENCE_MIN..=SEQUENCE_MAX).contains(v))
}

/// Leading decimal digits of `text` reduced modulo 999, 0 when there are none.
///
/// Used to seed appends from whatever the last sequence cell holds. The
/// reduction happens digit by digit, so runs of any length wrap the same
/// way `next_value` would wrap the full integer.
pub fn parse_leading(text: &str) -> u32 {
    text.trim_start()
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0, |acc, d| (acc * 10 + d) % SEQUENCE_MAX)
}

/// Values for `len` consecutive cells starting at `start`.
pub fn generate(start: u32, len: usize) -> Result<Vec<String>> {
    if !(SEQUENCE_MIN..=SEQUENCE_MAX).contains(&start) {
        tracing::warn!(start, "rejected sequence start");
        return Err(TableError::SequenceOutOfRange(start));
    }
    Ok(Continuation::starting_at(start).take(len).collect())
}

/// Values following `last`, which need not itself be in range (0 = empty column)
pub fn continue_from(last: u32, len: usize) -> Vec<String> {
    Continuation::after(last).take(len).collect()
}

/// Endless iterator over formatted sequence values
#[derive(Debug, Clone)]
pub struct Continuation {
    next: u32,
}

impl Continuation {
    pub fn starting_at(start: u32) -> Self {
        Self { next: start }
    }

    pub fn after(last: u32) -> Self {
        Self {
            next: next_value(last),
        }
    }
}

impl Iterator for Continuation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = self.next;
        self.next = next_value(current);
        Some(format_value(current))
    }
}

/// Rewrite every sequence cell of `grid`, in row-major order, starting at
/// `start`. Returns the cells whose text changed.
pub fn renumber(grid: &mut Grid, start: u32) -> Result<Vec<CellPosition>> {
    let positions = grid.sequence_cells();
    let values = generate(start, positions.len())?;
    let mut changed = Vec::new();
    for (pos, value) in positions.into_iter().zip(values) {
        let cell = grid.cell_mut(pos)?;
        cell.valid = true;
        if cell.text != value {
            cell.text = value;
            changed.push(pos);
        }
    }
    tracing::debug!(start, changed = changed.len(), "renumbered sequence column");
    Ok(changed)
}

/// Value held by the last sequence cell, 0 when the column is empty
pub fn last_value(grid: &Grid) -> u32 {
    grid.sequence_cells()
        .last()
        .and_then(|&pos| grid.cell(pos).ok())
        .map(|cell| parse_leading(&cell.text))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ColumnLayout;

    #[test]
    fn test_generate_consecutive() {
        assert_eq!(
            generate(5, 5).unwrap(),
            vec!["005", "006", "007", "008", "009"]
        );
    }

    #[test]
    fn test_generate_wraps() {
        assert_eq!(generate(999, 2).unwrap(), vec!["999", "001"]);
        assert_eq!(generate(998, 3).unwrap(), vec!["998", "999", "001"]);
    }

    #[test]
    fn test_generate_rejects_out_of_range() {
        assert!(matches!(generate(0, 3), Err(TableError::SequenceOutOfRange(0))));
        assert!(matches!(generate(1000, 1), Err(TableError::SequenceOutOfRange(1000))));
        assert!(generate(1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_continue_from() {
        assert_eq!(
            continue_from(42, 5),
            vec!["043", "044", "045", "046", "047"]
        );
        assert_eq!(continue_from(0, 2), vec!["001", "002"]);
        assert_eq!(continue_from(999, 1), vec!["001"]);
    }

    #[test]
    fn test_parse_committed() {
        assert_eq!(parse_committed("7"), Some(7));
        assert_eq!(parse_committed("007"), Some(7));
        assert_eq!(parse_committed("999"), Some(999));
        assert_eq!(parse_committed("0"), None);
        assert_eq!(parse_committed("000"), None);
        assert_eq!(parse_committed("1000"), None);
        assert_eq!(parse_committed(""), None);
        assert_eq!(parse_committed("1a"), None);
        assert_eq!(parse_committed(" 12"), None);
    }

    #[test]
    fn test_parse_leading() {
        assert_eq!(parse_leading("042"), 42);
        assert_eq!(parse_leading("12abc"), 12);
        assert_eq!(parse_leading(""), 0);
        assert_eq!(parse_leading("x1"), 0);
        assert_eq!(parse_leading("999"), 0);
        assert_eq!(parse_leading("1000"), 1);
        assert_eq!(parse_leading("99999999999"), 99);
    }

    #[test]
    fn test_long_value_wraps_like_its_integer() {
        let long = "123456789012345678901234567890";
        let exact = long.parse::<u128>().unwrap() % u128::from(SEQUENCE_MAX);
        assert_eq!(u128::from(parse_leading(long)), exact);
        assert_eq!(next_value(parse_leading(long)), exact as u32 + 1);
    }

    #[test]
    fn test_renumber_from_start() {
        let rows = (0..3)
            .map(|_| vec![String::new(); ColumnLayout::aircraft_table().len()])
            .collect();
        let mut grid = Grid::from_texts(ColumnLayout::aircraft_table(), rows).unwrap();
        grid.cell_mut(CellPosition::new(1, 0)).unwrap().text = "999".into();

        let changed = renumber(&mut grid, 998).unwrap();
        let texts: Vec<_> = grid
            .sequence_cells()
            .into_iter()
            .map(|p| grid.cell(p).unwrap().text.clone())
            .collect();
        assert_eq!(texts, vec!["998", "999", "001"]);
        assert_eq!(changed, vec![CellPosition::new(0, 0), CellPosition::new(2, 0)]);
        assert_eq!(last_value(&grid), 1);
    }

    #[test]
    fn test_last_value_of_empty_column() {
        let grid = Grid::new(ColumnLayout::aircraft_table());
        assert_eq!(last_value(&grid), 0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1), "001");
        assert_eq!(format_value(42), "042");
        assert_eq!(format_value(999), "999");
    }
}
