//! Width-aware single-line rendering helpers.
//!
//! Fields present themselves to the host as one display line; these helpers
//! keep that line within a cell budget without splitting grapheme clusters.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of `s` in terminal cells.
#[must_use]
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(UnicodeWidthStr::width).sum()
}

/// Truncate `s` to at most `max_width` cells, never mid-grapheme.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut end = 0;
    for (idx, grapheme) in s.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if width + w > max_width {
            break;
        }
        width += w;
        end = idx + grapheme.len();
    }
    &s[..end]
}

/// Compose a `label: content` line clipped to `max_width` cells.
///
/// A `max_width` of zero yields an empty line.
#[must_use]
pub fn labeled_line(label: &str, content: &str, max_width: usize) -> String {
    let line = format!("{label}: {content}");
    truncate_to_width(&line, max_width).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_ascii() {
        assert_eq!(display_width("abc"), 3);
    }

    #[test]
    fn width_of_wide_chars() {
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn truncate_respects_budget() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn truncate_never_splits_wide_char() {
        // "日" is 2 cells; a 3-cell budget fits only one of them plus 'a'.
        assert_eq!(truncate_to_width("a日本", 3), "a日");
    }

    #[test]
    fn labeled_line_clips() {
        assert_eq!(labeled_line("Path", "/tmp", 20), "Path: /tmp");
        assert_eq!(labeled_line("Path", "/tmp", 6), "Path: ");
        assert_eq!(labeled_line("Path", "/tmp", 0), "");
    }
}
