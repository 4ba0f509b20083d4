//! The wrapped grid: ordered text cells rendered as an aligned block.
//!
//! Cells are laid out left to right, top to bottom. Each cell is word-wrapped
//! to the width of the column it lands in, and the wrapped lines of every
//! cell in a row are interleaved so that row-mates stay vertically aligned.

use std::io::Write;

use tracing::trace;

use crate::columns::{self, ColumnLayout};
use crate::error::{Error, Result};
use crate::measure::{display_width, CellWidths};
use crate::wrap::wrap_text;

/// Screen width used when none is configured.
pub const DEFAULT_SCREEN_WIDTH: usize = 80;

/// An adaptive grid of word-wrapped text cells.
///
/// Cells are rendered in insertion order into as many columns as fit the
/// screen width, separated by single spaces, with every fragment right-padded
/// to its column's width. Rendering is read-only and deterministic: the same
/// grid renders to the same bytes every time.
///
/// # Example
///
/// ```
/// use wrapped_grid::WrappedGrid;
///
/// let mut grid = WrappedGrid::with_screen_width(20);
/// grid.add_cell("a");
/// grid.add_cell("b");
///
/// let mut out = Vec::new();
/// grid.render(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "a b\n");
/// ```
#[derive(Debug, Clone)]
pub struct WrappedGrid {
    screen_width: usize,
    cells: Vec<String>,
}

impl Default for WrappedGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl WrappedGrid {
    /// Creates an empty grid with the default screen width of 80.
    pub fn new() -> Self {
        Self::with_screen_width(DEFAULT_SCREEN_WIDTH)
    }

    /// Creates an empty grid constrained to the given screen width.
    ///
    /// The width is validated at render time; a zero width makes `render`
    /// fail with [`Error::InvalidScreenWidth`].
    pub fn with_screen_width(screen_width: usize) -> Self {
        Self {
            screen_width,
            cells: Vec::new(),
        }
    }

    /// The configured screen width.
    pub fn screen_width(&self) -> usize {
        self.screen_width
    }

    /// Appends one cell to the grid.
    ///
    /// Cell order is significant and preserved through rendering. Empty
    /// strings are valid cells; embedded newlines act as hard breaks.
    pub fn add_cell(&mut self, text: impl Into<String>) {
        self.cells.push(text.into());
    }

    /// Number of cells added so far.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Lays out all cells and writes the grid to `sink`.
    ///
    /// An empty grid writes nothing. Rendering never drops or truncates cell
    /// content: when a cell's unbreakable prefix is wider than the screen,
    /// the affected line overflows instead.
    pub fn render(&self, sink: &mut dyn Write) -> Result<()> {
        if self.screen_width == 0 {
            return Err(Error::InvalidScreenWidth(self.screen_width));
        }

        if self.cells.is_empty() {
            return Ok(());
        }

        let cell_widths: Vec<CellWidths> =
            self.cells.iter().map(|cell| CellWidths::of(cell)).collect();
        let layout = columns::solve(&cell_widths, self.screen_width);

        trace!(
            cells = self.cells.len(),
            columns = layout.count(),
            "rendering wrapped grid"
        );

        let lines = self.arrange(&layout);
        write_lines(sink, &lines, &layout)
    }

    /// Wraps every cell to its column's width and flattens the rows into a
    /// row-major line sequence.
    ///
    /// Within a row, one line is taken from each column left to right until
    /// every column's wrapped lines are exhausted; exhausted columns (and the
    /// padding slots of a short final row) contribute empty strings, so all
    /// columns of a row emit the same number of lines.
    fn arrange(&self, layout: &ColumnLayout) -> Vec<String> {
        let columns = layout.count();

        let wrapped: Vec<Vec<String>> = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| wrap_text(cell, layout.width(i % columns)))
            .collect();

        let mut lines = Vec::new();

        for row in wrapped.chunks(columns) {
            let height = row.iter().map(Vec::len).max().unwrap_or(0);

            for line_index in 0..height {
                for column in 0..columns {
                    let fragment = row
                        .get(column)
                        .and_then(|cell_lines| cell_lines.get(line_index))
                        .map_or("", String::as_str);
                    lines.push(fragment.to_string());
                }
            }
        }

        lines
    }
}

/// Writes the flattened line sequence, padding each fragment to its column
/// width and separating columns with single spaces.
fn write_lines(sink: &mut dyn Write, lines: &[String], layout: &ColumnLayout) -> Result<()> {
    let columns = layout.count();
    let mut column = 0;

    for line in lines {
        if column != 0 {
            sink.write_all(b" ")?;
        }

        sink.write_all(line.as_bytes())?;

        let padding = layout.width(column).saturating_sub(display_width(line));
        if padding > 0 {
            sink.write_all(" ".repeat(padding).as_bytes())?;
        }

        column = (column + 1) % columns;
        if column == 0 {
            sink.write_all(b"\n")?;
        }
    }

    // Rows are padded upstream, so this only fires on a malformed sequence.
    if column != 0 {
        sink.write_all(b"\n")?;
    }

    Ok(())
}
