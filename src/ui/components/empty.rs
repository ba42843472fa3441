//! Empty state component renderer.

use crate::ui::helpers::{position_cursor, print_clipped};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a two-line message centered within `width` columns starting at
/// column `left`, with the message on `row` and the subtitle below it.
///
/// ```text
///          No results for «xyz»
///      Try a shorter or different query
/// ```
pub fn render_empty_state(row: usize, left: usize, empty: &EmptyState, theme: &Theme, width: usize) {
    let msg_len = empty.message.chars().count().min(width);
    let msg_padding = width.saturating_sub(msg_len) / 2;

    position_cursor(row, left);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print_clipped(&empty.message, width);
    print!("{}", " ".repeat(width.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = empty.subtitle.chars().count().min(width);
    let sub_padding = width.saturating_sub(sub_len) / 2;

    position_cursor(row + 1, left);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print_clipped(&empty.subtitle, width);
    print!("{}", " ".repeat(width.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
