//! Palette query input renderer.

use crate::ui::helpers::{position_cursor, print_clipped};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

const PLACEHOLDER: &str = "Jump to a page or topic...";

/// Renders the three-line query box. Returns the row after it.
///
/// ```text
///   ┌──────────────────────────────┐
///   │ > backend█                   │
///   └──────────────────────────────┘
/// ```
///
/// The block cursor is only drawn once the input has focus. An empty query
/// shows a dimmed placeholder instead.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.palette_border);

    position_cursor(row, 1);
    print!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    position_cursor(row + 1, 1);
    print!("{margin}{border}│ > ");
    let mut used = 3;
    let room = inner_width.saturating_sub(used);

    if search.query.is_empty() && !search.focused {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        used += print_clipped(PLACEHOLDER, room);
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        // Keep the tail of long queries visible.
        let reserve = usize::from(search.focused);
        let len = search.query.chars().count();
        let skip = len.saturating_sub(room.saturating_sub(reserve));
        let tail: String = search.query.chars().skip(skip).collect();
        used += print_clipped(&tail, room);
        if search.focused && used < inner_width {
            print!("█");
            used += 1;
        }
    }

    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
