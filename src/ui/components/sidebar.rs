//! Sidebar renderer.
//!
//! Line layout must stay in step with `layout::hit_test`: for each category a
//! heading line, one line per page, then a blank line.

use crate::ui::helpers::{fill_line, position_cursor, print_clipped};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SidebarView;

/// Renders the sidebar between `top` and `bottom` (inclusive), `width`
/// columns wide, followed by a vertical divider.
pub fn render_sidebar(top: usize, bottom: usize, sidebar: &SidebarView, theme: &Theme, width: usize) {
    let inner = width.saturating_sub(1);
    let mut row = top;

    for section in &sidebar.sections {
        if row > bottom {
            break;
        }
        position_cursor(row, 1);
        print!(" {}{}", Theme::bold(), Theme::fg(&theme.colors.category_fg));
        let used = 1 + print_clipped(&section.category, inner.saturating_sub(1));
        print!("{}", Theme::reset());
        fill_line(used, inner);
        row += 1;

        for item in &section.items {
            if row > bottom {
                break;
            }
            position_cursor(row, 1);
            if item.is_current {
                print!("{}", Theme::fg(&theme.colors.sidebar_active_fg));
                print!(" ● ");
            } else {
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!("   ");
            }
            let used = 3 + print_clipped(&item.title, inner.saturating_sub(3));
            print!("{}", Theme::reset());
            fill_line(used, inner);
            row += 1;
        }

        if row <= bottom {
            position_cursor(row, 1);
            fill_line(0, inner);
            row += 1;
        }
    }

    while row <= bottom {
        position_cursor(row, 1);
        fill_line(0, inner);
        row += 1;
    }

    print!("{}", Theme::fg(&theme.colors.border));
    for divider_row in top..=bottom {
        position_cursor(divider_row, width);
        print!("│");
    }
    print!("{}", Theme::reset());
}
