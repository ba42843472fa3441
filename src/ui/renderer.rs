//! Top-level rendering coordinator.
//!
//! Rendering is two steps: bring the palette selection into the scroll
//! window for the current pane height, then compute the view model and hand
//! it to the layout for the active body.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Takes `&mut` because the viewport is resized to the pane and nudged to
/// keep the selected row visible after a resize.
pub fn render(state: &mut AppState, rows: usize, cols: usize) {
    state.viewport.resize(layout::palette_list_height(rows));
    if let Some(row) = state.palette.selected_row() {
        state.scroll_into_view(row);
    }

    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        Body::Page(page) => {
            components::render_page_mode(&vm.header, &vm.footer, page, theme, rows, cols);
        }
        Body::Palette(palette) => {
            components::render_palette_mode(&vm.header, &vm.footer, palette, theme, rows, cols);
        }
    }
}
