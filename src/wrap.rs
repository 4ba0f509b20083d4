//! Greedy word wrapping for grid cells.
//!
//! Lines break only at spaces; a word wider than the target width is emitted
//! on its own (overflowing) line rather than cut. Embedded newlines are
//! preserved as hard breaks.

use crate::measure::display_width;

/// Wrap text to fit within `width` units.
///
/// Returns one string per output line. Interior runs of spaces survive as
/// long as they fit on one line; spaces at break points are dropped. Empty
/// text wraps to a single empty line.
///
/// # Example
///
/// ```
/// use wrapped_grid::wrap::wrap_text;
///
/// let lines = wrap_text("hello world foo bar", 5);
/// assert_eq!(lines, vec!["hello", "world", "foo", "bar"]);
///
/// // Hard breaks are kept
/// assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
///
/// // Oversized words are never cut
/// assert_eq!(wrap_text("overlong", 3), vec!["overlong"]);
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        wrap_segment(segment, width, &mut lines);
    }

    lines
}

/// Wrap one hard-break-free segment, appending its lines to `out`.
fn wrap_segment(segment: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;
    let mut started = false;

    for word in segment.split(' ') {
        let word_width = display_width(word);

        if !started {
            current.push_str(word);
            current_width = word_width;
            started = true;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    out.push(current);
}
