//! Unicode text helpers for row rendering.
//!
//! Labels and descriptions can contain wide (CJK, fullwidth) characters, so
//! plain byte or char counts are wrong for layout. These helpers measure and
//! truncate by display columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncate a string to fit within `max_width` display columns.
///
/// If the string fits, it is returned unchanged. Otherwise `tail` (e.g. "…")
/// is appended and the total display width of the result, tail included, does
/// not exceed `max_width`.
///
/// # Examples
///
/// ```
/// use pick_widgets::text::truncate;
///
/// assert_eq!(truncate("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate("hi", 10, "..."), "hi");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let tail_width = tail.width();
    if tail_width >= max_width {
        return take_columns(tail, max_width);
    }

    let mut result = take_columns(s, max_width - tail_width);
    result.push_str(tail);
    result
}

/// Longest prefix of `s` that fits in `max_width` columns.
fn take_columns(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max_width {
            break;
        }
        result.push(c);
        width += cw;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn width_cjk() {
        assert_eq!(display_width("\u{4E16}\u{754C}"), 4); // "世界"
    }

    #[test]
    fn truncate_not_needed() {
        assert_eq!(truncate("hello", 10, "..."), "hello");
        assert_eq!(truncate("hello", 5, "..."), "hello");
    }

    #[test]
    fn truncate_basic() {
        assert_eq!(truncate("hello world", 8, "..."), "hello...");
    }

    #[test]
    fn truncate_with_cjk() {
        // "世界abc" has width 7; truncating to 6 with a width-1 tail keeps "世界a".
        let result = truncate("\u{4E16}\u{754C}abc", 6, "\u{2026}");
        assert_eq!(display_width(&result), 6);
        assert!(result.ends_with('\u{2026}'));
    }

    #[test]
    fn truncate_empty_tail() {
        assert_eq!(truncate("hello world", 5, ""), "hello");
    }

    #[test]
    fn truncate_tail_wider_than_max() {
        assert_eq!(truncate("hello", 2, "..."), "..");
    }
}
