//! Content pane renderer for the current page.

use super::empty::render_empty_state;
use crate::ui::helpers::{fill_line, position_cursor, print_clipped};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ContentView;

/// Renders the page starting at column `left`, `width` columns wide.
///
/// ```text
///  ARCHITECTURE
///  Backend Services Architecture
///  /backend-services
///
///  Service boundaries, messaging and persistence layers
///
///  Keywords: api, services, queues
/// ```
pub fn render_content(top: usize, left: usize, content: &ContentView, theme: &Theme, width: usize) {
    let (title, category, destination, description, keywords) = match content {
        ContentView::Entry {
            title,
            category,
            destination,
            description,
            keywords,
        } => (title, category, destination, description, keywords),
        ContentView::Empty(empty) => {
            render_empty_state(top + 2, left, empty, theme, width);
            return;
        }
    };

    let room = width.saturating_sub(2);
    let line = |row: usize, color: &str, style: &str, text: &str| {
        position_cursor(row, left);
        print!(" {style}{}", Theme::fg(color));
        let used = 1 + print_clipped(text, room);
        print!("{}", Theme::reset());
        fill_line(used, width);
    };

    line(top, &theme.colors.category_fg, "", &category.to_uppercase());
    line(top + 1, &theme.colors.header_fg, Theme::bold(), title);
    line(top + 2, &theme.colors.text_dim, Theme::dim(), destination);

    let mut row = top + 4;
    if !description.is_empty() {
        line(row, &theme.colors.text_normal, "", description);
        row += 2;
    }
    if !keywords.is_empty() {
        line(row, &theme.colors.text_dim, "", &format!("Keywords: {}", keywords.join(", ")));
    }
}
