//! Shared rendering utilities and helpers.
//!
//! This module provides low-level text utilities used across multiple UI
//! components: width-aware padding and truncation, word wrapping, search match
//! location, and highlight rendering with proper ANSI escape sequence
//! management.
//!
//! All functions operate on character indices, not byte indices, so they are
//! UTF-8 safe.
//!
//! # Example
//!
//! ```rust
//! use brewlog::ui::helpers::{match_ranges, strip_ansi, render_highlighted_text};
//! use brewlog::ui::theme::Theme;
//!
//! let theme = Theme::default();
//! let ranges = match_ranges("Ethiopian", "thi");
//! assert_eq!(ranges, vec![(1, 4)]);
//!
//! let styled = render_highlighted_text("Ethiopian", &ranges, &theme);
//! assert_eq!(strip_ansi(&styled), "Ethiopian");
//! ```

use crate::ui::theme::Theme;

/// Number of terminal columns `text` occupies, ignoring escape sequences.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

/// Removes ANSI CSI escape sequences from `text`.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for terminator in chars.by_ref() {
                if terminator.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Centers `text` within `cols`, padding both sides.
///
/// If the width cannot be split evenly, the left padding is smaller.
#[must_use]
pub fn center(text: &str, cols: usize) -> String {
    let len = visible_len(text);
    let padding = cols.saturating_sub(len) / 2;
    format!(
        "{}{text}{}",
        " ".repeat(padding),
        " ".repeat(cols.saturating_sub(padding + len))
    )
}

/// Shortens plain `text` to at most `max` characters, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Greedy word wrap of plain `text` to lines of at most `width` characters.
///
/// Words longer than `width` are truncated.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Character ranges of `text` that case-insensitively match `query`.
///
/// Ranges are `(start, end)` with inclusive start and exclusive end, do not
/// overlap, and are in ascending order. An empty query matches nothing.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use the theme's match highlight
/// colors; after each highlight the normal text color is restored.
#[must_use]
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            out.extend(&chars[current_pos..start]);
        }

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start.max(current_pos)..end.max(current_pos)]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = current_pos.max(end);
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
    out
}
