//! Adaptive column-grid text layout for fixed-width terminal output.
//!
//! This crate renders an ordered list of text cells into a column-aligned,
//! word-wrapped block constrained to a fixed screen width. It decides how
//! many columns fit, how wide each column should be, wraps cell text without
//! cutting words, and interleaves the wrapped lines so that multi-line cells
//! stay vertically aligned with their row-mates.
//!
//! # Features
//!
//! - **Width analysis**: natural and minimum (unbreakable-prefix) widths per cell
//! - **Column solving**: shrink-until-fit search that maximizes column count
//! - **Word wrapping**: greedy breaks at spaces, hard breaks preserved, words never cut
//! - **Aligned rendering**: right-padded fragments, single-space separators
//!
//! Layout never drops or truncates content: a cell whose unbreakable prefix
//! exceeds the screen width renders as an overflowing line instead.
//!
//! # Example
//!
//! ```
//! use wrapped_grid::WrappedGrid;
//!
//! let mut grid = WrappedGrid::with_screen_width(20);
//! for cell in ["a", "b", "c", "d", "e"] {
//!     grid.add_cell(cell);
//! }
//!
//! let mut out = Vec::new();
//! grid.render(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "a b c d e\n");
//! ```

pub mod columns;
pub mod error;
pub mod grid;
pub mod measure;
pub mod wrap;

// Re-export commonly used items at the crate root
pub use columns::{solve, ColumnLayout, MIN_COLUMNS};
pub use error::{Error, Result};
pub use grid::{WrappedGrid, DEFAULT_SCREEN_WIDTH};
pub use measure::{display_width, min_width, natural_width, CellWidths};
pub use wrap::wrap_text;
