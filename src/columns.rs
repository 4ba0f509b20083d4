//! Column layout solver: how many columns fit, and how wide each one is.
//!
//! The solver starts from an optimistic column count derived from the cells'
//! natural widths and shrinks it until the grid fits the screen width. It
//! always terminates: a single column is accepted unconditionally, even when
//! an unbreakable cell forces the rendered line past the screen edge.

use crate::measure::CellWidths;
use smallvec::{smallvec, SmallVec};
use tracing::debug;

/// Minimum column count the solver aims for.
///
/// The per-column width cap is derived from this: while probing for a column
/// count, no column is allowed wider than a 1/`MIN_COLUMNS` share of the
/// screen (minus one unit for the separating space).
pub const MIN_COLUMNS: usize = 4;

/// The ordered column widths chosen for one render.
///
/// Invariant: `total_width() <= screen_width` for the screen width the layout
/// was solved for, unless a cell's minimum width alone exceeds the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    widths: SmallVec<[usize; 8]>,
}

impl ColumnLayout {
    /// Number of columns.
    pub fn count(&self) -> usize {
        self.widths.len()
    }

    /// Width of the given column.
    ///
    /// # Panics
    ///
    /// Panics if `column >= count()`.
    pub fn width(&self, column: usize) -> usize {
        self.widths[column]
    }

    /// All column widths in order.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Total rendered width: column widths plus one separating space per gap.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.widths.len().saturating_sub(1)
    }
}

/// Choose the number of columns and per-column widths for the given cells.
///
/// Cells are assigned to columns round-robin in order, so the width of a
/// column is governed by the widest cell that lands in its slot. A cell's
/// minimum width always wins over the per-column cap: words are never cut to
/// make a layout fit.
///
/// # Example
///
/// ```
/// use wrapped_grid::{solve, CellWidths};
///
/// let cells = [CellWidths::of("ab"), CellWidths::of("cd")];
/// let layout = solve(&cells, 80);
/// assert_eq!(layout.widths(), &[2, 2]);
/// ```
pub fn solve(cells: &[CellWidths], screen_width: usize) -> ColumnLayout {
    if cells.is_empty() {
        return ColumnLayout { widths: smallvec![] };
    }

    // Saturates at 0 for screens narrower than MIN_COLUMNS; the shrink loop
    // below still converges through the single-column fallback.
    let max_column_width = (screen_width / MIN_COLUMNS).saturating_sub(1);

    let mut columns = initial_column_count(cells, max_column_width, screen_width).max(1);

    loop {
        let widths = slot_widths(cells, max_column_width, columns);
        let total = widths.iter().sum::<usize>() + (columns - 1);

        if total <= screen_width || columns == 1 {
            debug!(columns, total, screen_width, "column layout converged");
            return ColumnLayout { widths };
        }

        columns -= 1;
    }
}

/// Optimistic upper bound on the column count: accumulate capped natural
/// widths (plus separator) across cells in order and stop at the first cell
/// that would overrun the screen.
fn initial_column_count(cells: &[CellWidths], max_column_width: usize, screen_width: usize) -> usize {
    let mut total = 0;
    let mut columns = 0;

    for cell in cells {
        total += max_column_width.min(cell.natural) + 1;

        if total > screen_width {
            return columns;
        }

        columns += 1;
    }

    columns
}

/// Per-slot widths for a candidate column count.
///
/// Each slot takes the maximum over its round-robin cells of
/// `min(max(cap, min_width), natural_width)`: wide enough for the cell's
/// unbreakable prefix, never wider than its content needs.
fn slot_widths(
    cells: &[CellWidths],
    max_column_width: usize,
    columns: usize,
) -> SmallVec<[usize; 8]> {
    let mut widths: SmallVec<[usize; 8]> = smallvec![0; columns];

    for (i, cell) in cells.iter().enumerate() {
        let cap = max_column_width.max(cell.min);
        let slot = i % columns;
        widths[slot] = widths[slot].max(cap.min(cell.natural));
    }

    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths_of(texts: &[&str]) -> Vec<CellWidths> {
        texts.iter().map(|t| CellWidths::of(t)).collect()
    }

    #[test]
    fn test_empty_cells_yield_empty_layout() {
        let layout = solve(&[], 80);
        assert_eq!(layout.count(), 0);
        assert_eq!(layout.total_width(), 0);
    }

    #[test]
    fn test_short_cells_keep_many_columns() {
        let layout = solve(&widths_of(&["a", "b", "c", "d", "e"]), 20);
        assert_eq!(layout.widths(), &[1, 1, 1, 1, 1]);
        assert!(layout.count() >= MIN_COLUMNS);
        assert!(layout.total_width() <= 20);
    }

    #[test]
    fn test_single_long_word_falls_back_to_one_column() {
        let layout = solve(&widths_of(&["supercalifragilisticexpialidocious"]), 10);
        assert_eq!(layout.count(), 1);
        // Unbreakable content may overflow the screen
        assert_eq!(layout.width(0), 34);
    }

    #[test]
    fn test_shrinks_until_fit() {
        // Three unbreakable 6-unit cells on a 12-unit screen: 3 columns need
        // 20 units, 2 need 13, only 1 fits.
        let layout = solve(&widths_of(&["abcdef", "ghijkl", "mnopqr"]), 12);
        assert_eq!(layout.count(), 1);
        assert_eq!(layout.width(0), 6);
    }

    #[test]
    fn test_min_width_beats_cap() {
        // Cap is 4 at screen width 20, but the first cell's unbreakable
        // prefix is 10 units wide.
        let layout = solve(&widths_of(&["abcdefghij more text", "x"]), 20);
        assert_eq!(layout.widths(), &[10, 1]);
    }

    #[test]
    fn test_column_width_is_max_over_slot() {
        // Four cells, two columns: slot 0 sees "aa" and "ccc", slot 1 sees
        // "b" and "dddd".
        let cells = widths_of(&["aa", "b", "ccc", "dddd"]);
        let widths = slot_widths(&cells, 10, 2);
        assert_eq!(&widths[..], &[3, 4]);
    }

    #[test]
    fn test_initial_count_stops_before_overrun() {
        // Each cell costs min(4, natural) + 1 = 5 units at screen width 12.
        let cells = widths_of(&["abcd", "efgh", "ijkl"]);
        assert_eq!(initial_column_count(&cells, 4, 12), 2);
    }

    #[test]
    fn test_mixed_cells_two_columns() {
        let layout = solve(
            &widths_of(&["short", "a much longer phrase that needs wrapping"]),
            20,
        );
        assert_eq!(layout.widths(), &[5, 4]);
        assert!(layout.total_width() <= 20);
    }

    #[test]
    fn test_narrow_screen_converges() {
        let layout = solve(&widths_of(&["one", "two", "three"]), 3);
        assert_eq!(layout.count(), 1);
    }

    #[test]
    fn test_fit_invariant_random_shapes() {
        let texts = [
            "alpha", "beta gamma", "d", "", "a somewhat longer cell value",
            "two\nlines", "trailing ",
        ];
        for screen_width in [5, 10, 20, 40, 80] {
            let layout = solve(&widths_of(&texts), screen_width);
            assert!(layout.count() >= 1);
            // No cell's minimum exceeds these screens except the narrowest
            if screen_width >= 10 {
                assert!(
                    layout.total_width() <= screen_width,
                    "width {screen_width}: {:?}",
                    layout.widths()
                );
            }
        }
    }
}
