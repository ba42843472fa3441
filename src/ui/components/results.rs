//! Palette result list renderer.
//!
//! Draws the already-windowed rows of a
//! [`PaletteView`](crate::ui::viewmodel::PaletteView): category headings
//! followed by their results, with the selected row inverted.

use crate::ui::helpers::{self, fill_line, position_cursor};
use crate::ui::layout::ITEM_INDENT;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, PaletteRow};

/// Renders `rows` starting at `row`. Returns the row after the last one.
pub fn render_result_rows(row: usize, rows: &[PaletteRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for palette_row in rows {
        current_row = match palette_row {
            PaletteRow::Heading(category) => render_heading(current_row, category, theme, cols),
            PaletteRow::Item(item) => render_item(current_row, item, theme, cols),
        };
    }
    current_row
}

fn render_heading(row: usize, category: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("  {}{}", Theme::bold(), Theme::fg(&theme.colors.category_fg));
    let used = 2 + helpers::print_clipped(&category.to_uppercase(), cols.saturating_sub(2));
    print!("{}", Theme::reset());
    fill_line(used, cols);
    row + 1
}

/// One result: marker, highlighted title, dimmed description.
///
/// Selection colors take precedence over everything but match highlights,
/// which are re-based on the selection background.
fn render_item(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    print!("{base}");
    let marker = if item.is_selected { "  ▸ " } else { "    " };
    print!("{marker}");

    helpers::render_highlighted_text(
        &item.title,
        &item.highlight_ranges,
        theme,
        Some(base.as_str()),
    );
    let mut used = ITEM_INDENT + item.title.chars().count();

    if !item.description.is_empty() {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("  ");
        used += 2 + helpers::print_clipped(&item.description, cols.saturating_sub(used + 2));
    }

    fill_line(used, cols);
    print!("{}", Theme::reset());
    row + 1
}
