//! Shared rendering utilities.
//!
//! Cursor positioning plus width-aware text fitting. Widths are counted in
//! characters, so multi-byte titles are never split inside a code point.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` characters, ending in "..." when cut.
///
/// # Example
///
/// ```rust
/// use projboard::ui::helpers::truncate;
///
/// assert_eq!(truncate("Build Bridge", 8), "Build...");
/// assert_eq!(truncate("Short", 8), "Short");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut shortened: String = text.chars().take(width - 3).collect();
    shortened.push_str("...");
    shortened
}

/// Truncates or right-pads `text` to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let pad = width.saturating_sub(truncated.chars().count());
    format!("{truncated}{}", " ".repeat(pad))
}

/// Centers `text` in `width` characters; extra padding goes to the right.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let len = truncated.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(left + len);
    format!("{}{truncated}{}", " ".repeat(left), " ".repeat(right))
}
