use std::ops::Range;

use crate::grid::{Cell, Grid, Row};
use crate::sequence::{self, Continuation};

/// Append `count` blank rows to `grid`.
///
/// Sequence cells continue from the column's last value instead of
/// restarting. Existing rows are never touched. Returns the new row indices.
pub fn append_rows(grid: &mut Grid, count: usize) -> Range<usize> {
    let first = grid.row_count();
    let width = grid.col_count();
    let sequence_cols: Vec<usize> = grid.layout().sequence_columns().collect();
    let mut numbers = Continuation::after(sequence::last_value(grid));

    for _ in 0..count {
        let mut row = Row::blank(width);
        for &col in &sequence_cols {
            if let Some(value) = numbers.next() {
                row.cells[col] = Cell::with_text(value);
            }
        }
        grid.push_row(row);
    }

    tracing::debug!(first, count, "appended rows");
    first..grid.row_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ColumnLayout;
    use crate::state::CellPosition;

    fn aim_texts(grid: &Grid) -> Vec<String> {
        grid.sequence_cells()
            .into_iter()
            .map(|p| grid.cell(p).unwrap().text.clone())
            .collect()
    }

    #[test]
    fn test_append_continues_sequence() {
        let width = ColumnLayout::aircraft_table().len();
        let mut texts = vec![String::new(); width];
        texts[0] = "042".into();
        let mut grid = Grid::from_texts(ColumnLayout::aircraft_table(), vec![texts]).unwrap();

        let added = append_rows(&mut grid, 5);
        assert_eq!(added, 1..6);
        assert_eq!(aim_texts(&grid), vec!["042", "043", "044", "045", "046", "047"]);
    }

    #[test]
    fn test_append_to_empty_grid_starts_at_one() {
        let mut grid = Grid::new(ColumnLayout::aircraft_table());
        append_rows(&mut grid, 2);
        assert_eq!(aim_texts(&grid), vec!["001", "002"]);
    }

    #[test]
    fn test_append_wraps_after_999() {
        let width = ColumnLayout::aircraft_table().len();
        let mut texts = vec![String::new(); width];
        texts[0] = "998".into();
        let mut grid = Grid::from_texts(ColumnLayout::aircraft_table(), vec![texts]).unwrap();
        append_rows(&mut grid, 3);
        assert_eq!(aim_texts(&grid), vec!["998", "999", "001", "002"]);
    }

    #[test]
    fn test_unparsable_last_value_restarts() {
        let width = ColumnLayout::aircraft_table().len();
        let mut texts = vec![String::new(); width];
        texts[0] = "abc".into();
        let mut grid = Grid::from_texts(ColumnLayout::aircraft_table(), vec![texts]).unwrap();
        append_rows(&mut grid, 1);
        assert_eq!(grid.cell(CellPosition::new(1, 0)).unwrap().text, "001");
    }

    #[test]
    fn test_append_after_long_number_wraps() {
        let width = ColumnLayout::aircraft_table().len();
        let mut texts = vec![String::new(); width];
        texts[0] = "99999999999".into();
        let mut grid = Grid::from_texts(ColumnLayout::aircraft_table(), vec![texts]).unwrap();
        append_rows(&mut grid, 2);
        assert_eq!(aim_texts(&grid), vec!["99999999999", "100", "101"]);
    }

    #[test]
    fn test_append_leaves_existing_rows_and_blanks_others() {
        let width = ColumnLayout::aircraft_table().len();
        let mut texts = vec![String::new(); width];
        texts[1] = "ATC405".into();
        let mut grid = Grid::from_texts(ColumnLayout::aircraft_table(), vec![texts.clone()]).unwrap();
        let before = grid.rows()[0].clone();

        append_rows(&mut grid, 5);
        append_rows(&mut grid, 5);

        assert_eq!(grid.row_count(), 11);
        assert_eq!(grid.rows()[0], before);
        let new_row = &grid.rows()[6];
        assert!(new_row.cells[1..].iter().all(|c| c.text.is_empty() && c.valid));
    }
}
