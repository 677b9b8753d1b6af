//! Utility functions for ANSI-aware text measurement and padding.
//!
//! All functions in this module correctly handle ANSI escape codes: they are
//! preserved in output but don't count toward display width calculations.

use console::{measure_text_width, pad_str, Alignment};

/// Horizontal placement of a cell inside its column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Left-align text (pad on the right).
    Left,
    /// Right-align text (pad on the left).
    #[default]
    Right,
    /// Center text (pad on both sides, extra space on the right).
    Center,
}

impl Align {
    /// Pad `s` to `width` display columns according to this alignment.
    pub fn pad(self, s: &str, width: usize) -> String {
        match self {
            Align::Left => pad_right(s, width),
            Align::Right => pad_left(s, width),
            Align::Center => pad_center(s, width),
        }
    }
}

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// CJK wide characters count as two columns.
///
/// # Example
///
/// ```rust
/// use h5table_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// Strings already wider than `width` are returned unchanged.
///
/// # Example
///
/// ```rust
/// use h5table_render::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// # Example
///
/// ```rust
/// use h5table_render::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
///
/// # Example
///
/// ```rust
/// use h5table_render::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Pads with an arbitrary fill character, used by numeric formatting where
/// the fill is part of the format token.
pub(crate) fn pad_with(s: &str, width: usize, align: Align, fill: char) -> String {
    let len = display_width(s);
    if len >= width {
        return s.to_string();
    }
    let diff = width - len;
    let (left, right) = match align {
        Align::Left => (0, diff),
        Align::Right => (diff, 0),
        Align::Center => (diff / 2, diff - diff / 2),
    };
    let mut out = String::with_capacity(s.len() + diff * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}
