//! Fitting text into fixed-width columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Characters kept in front of the ellipsis by [`shrink_middle`].
const MIDDLE_HEAD: usize = 3;

/// Shorten `text` to `width` columns by cutting its end: `"long na..."`.
pub fn shrink_end(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width <= ELLIPSIS.len() {
        return take_columns(text, width).to_string();
    }
    let mut out = take_columns(text, width - ELLIPSIS.len()).to_string();
    out.push_str(ELLIPSIS);
    out
}

/// Shorten `text` to `width` columns by cutting out its middle, keeping the
/// first few characters and as much of the tail as fits: `"/ho.../src/bin"`.
pub fn shrink_middle(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let head = take_columns(text, MIDDLE_HEAD);
    let head_width = head.width();
    if width < head_width + ELLIPSIS.len() + 1 {
        return shrink_end(text, width);
    }

    let tail = take_columns_from_end(text, width - head_width - ELLIPSIS.len());
    format!("{head}{ELLIPSIS}{tail}")
}

/// Pad `text` with spaces to exactly `width` columns, shrinking it first.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = shrink_end(text, width);
    let used = out.width();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// Right-align `text` in `width` columns.
pub fn fit_right(text: &str, width: usize) -> String {
    let text = shrink_end(text, width);
    format!("{}{text}", " ".repeat(width.saturating_sub(text.width())))
}

/// Longest prefix of `text` that is at most `columns` wide.
fn take_columns(text: &str, columns: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > columns {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Longest suffix of `text` that is at most `columns` wide.
fn take_columns_from_end(text: &str, columns: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > columns {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}
