//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: title bar with the search affordance
//! - [`footer`]: keybinding hints
//! - [`search`]: palette query input
//! - [`results`]: grouped palette result rows
//! - [`sidebar`]: category tree of pages
//! - [`content`]: current page
//! - [`empty`]: centered empty-state message
//!
//! # Layout Modes
//!
//! - [`render_page_mode`]: Header + Sidebar/Content + Footer
//! - [`render_palette_mode`]: Header + Search bar + Results + Footer

mod content;
mod empty;
mod footer;
mod header;
mod results;
mod search;
mod sidebar;

use crate::app::modes::SidebarMode;
use crate::ui::helpers::position_cursor;
use crate::ui::layout::{self, BODY_START_ROW, HEADER_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, PageView, PaletteView};

use content::render_content;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use results::render_result_rows;
use search::render_search_bar;
use sidebar::render_sidebar;

/// Renders a horizontal border line. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_chrome(header: &HeaderInfo, footer: &FooterInfo, theme: &Theme, rows: usize, cols: usize) {
    let row = render_header(HEADER_ROW, header, theme, cols);
    render_border(row, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, footer, theme, cols);
}

/// Renders the routed page.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Sidebar │ Content]
/// [Border]
/// [Footer]
/// ```
pub fn render_page_mode(
    header: &HeaderInfo,
    footer: &FooterInfo,
    page: &PageView,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    render_chrome(header, footer, theme, rows, cols);

    let bottom = layout::body_end_row(rows);
    match &page.sidebar {
        Some(sidebar) => {
            render_sidebar(BODY_START_ROW, bottom, sidebar, theme, SidebarMode::WIDTH);
            let left = SidebarMode::WIDTH + 1;
            render_content(BODY_START_ROW, left, &page.content, theme, cols.saturating_sub(SidebarMode::WIDTH));
        }
        None => render_content(BODY_START_ROW, 1, &page.content, theme, cols),
    }
}

/// Renders the palette overlay.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Result rows or empty state]
/// [Border]
/// [Footer]
/// ```
pub fn render_palette_mode(
    header: &HeaderInfo,
    footer: &FooterInfo,
    palette: &PaletteView,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    render_chrome(header, footer, theme, rows, cols);

    let row = render_search_bar(BODY_START_ROW, &palette.search_bar, theme, cols);
    match &palette.empty_state {
        Some(empty) => render_empty_state(row + 1, 1, empty, theme, cols),
        None => {
            render_result_rows(row, &palette.rows, theme, cols);
        }
    }
}
