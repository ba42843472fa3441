//! Shared rendering utilities.
//!
//! Everything here prints directly to stdout. Text widths are measured in
//! chars, which is what the palette's highlight ranges index into.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `(row, col)`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` with the given char ranges highlighted.
///
/// Ranges are `(start, end)` char indices, end exclusive, sorted and
/// non-overlapping. When `base` is given (a selected row), it is re-applied
/// after each highlighted run so the row background stays intact.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base: Option<&str>,
) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        if let Some(base) = base {
            print!("{base}");
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Prints spaces from `used` columns up to `cols`.
pub fn fill_line(used: usize, cols: usize) {
    print!("{}", " ".repeat(cols.saturating_sub(used)));
}

/// Prints `text` cut to at most `max` chars and returns the width printed.
pub fn print_clipped(text: &str, max: usize) -> usize {
    let clipped: String = text.chars().take(max).collect();
    let width = clipped.chars().count();
    print!("{clipped}");
    width
}
