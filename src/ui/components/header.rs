//! Header component renderer.

use crate::ui::helpers::{position_cursor, print_clipped};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar: title centered, search hint flush right.
///
/// Returns the next available row.
///
/// ```text
/// [padding] Docs / Glossary [padding]  Search  Ctrl+k
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let hint_len = header.search_hint.chars().count();
    let title_room = cols.saturating_sub(hint_len);
    let title_len = header.title.chars().count().min(title_room);
    let padding = title_room.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print_clipped(&header.title, title_room);
    print!("{}", " ".repeat(title_room.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    if hint_len <= cols {
        print!("{}", Theme::fg(&theme.colors.palette_border));
        print!("{}", Theme::underline());
        print!("{}", header.search_hint);
        print!("{}", Theme::reset());
    }

    row + 1
}
