//! Cell text measurement.
//!
//! Widths are counted in grapheme clusters, one unit per cluster. The grid
//! does not consult display-width tables; alignment is defined in character
//! units, which keeps measurement and padding consistent with each other.

use unicode_segmentation::UnicodeSegmentation;

/// Measure the width of a single line of text.
///
/// # Example
///
/// ```
/// use wrapped_grid::measure::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width(""), 0);
/// ```
pub fn display_width(line: &str) -> usize {
    // Fast path for ASCII-only text
    if line.is_ascii() {
        return line.len();
    }

    line.graphemes(true).count()
}

/// The natural width of a cell: the width of its longest line.
///
/// # Example
///
/// ```
/// use wrapped_grid::measure::natural_width;
///
/// assert_eq!(natural_width("ab\ncdef\ng"), 4);
/// assert_eq!(natural_width(""), 0);
/// ```
pub fn natural_width(text: &str) -> usize {
    text.split('\n').map(display_width).max().unwrap_or(0)
}

/// The minimum width of a cell: the width of its unbreakable prefix.
///
/// Counts units up to the first space or newline; if the text contains
/// neither, this is the full text width. A column can never be narrower
/// than this without cutting a word.
///
/// # Example
///
/// ```
/// use wrapped_grid::measure::min_width;
///
/// assert_eq!(min_width("hello world"), 5);
/// assert_eq!(min_width("hello"), 5);
/// assert_eq!(min_width(""), 0);
/// ```
pub fn min_width(text: &str) -> usize {
    let mut width = 0;

    for grapheme in text.graphemes(true) {
        if matches!(grapheme, " " | "\n" | "\r\n") {
            return width;
        }
        width += 1;
    }

    width
}

/// Natural and minimum width of one cell.
///
/// Invariant: `min <= natural` — the unbreakable prefix is a prefix of the
/// cell's first line, which is at most as wide as its longest line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWidths {
    /// Width of the cell's longest line.
    pub natural: usize,
    /// Width of the cell's unbreakable prefix.
    pub min: usize,
}

impl CellWidths {
    /// Measure both widths of a cell.
    pub fn of(text: &str) -> Self {
        Self {
            natural: natural_width(text),
            min: min_width(text),
        }
    }
}
