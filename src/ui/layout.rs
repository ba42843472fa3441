//! Screen geometry shared by the renderer and pointer hit-testing.
//!
//! ```text
//! row 1        [blank]
//! row 2        [Header ............................ Search  Ctrl+k]
//! row 3        [Border]
//! row 4..=6    [Search bar]          (palette open)
//! row 7..      [Palette rows]        (palette open)
//! row 4..      [Sidebar | Content]   (palette closed)
//! row rows-2   [Border]
//! row rows-1   [Footer]
//! ```
//!
//! All row numbers here are 1-indexed screen rows, as used by
//! `position_cursor`.

use crate::app::modes::SidebarMode;
use crate::app::{AppState, Event};
use crate::domain::Destination;

pub const HEADER_ROW: usize = 2;
pub const BODY_START_ROW: usize = 4;
pub const SEARCH_BAR_HEIGHT: usize = 3;
pub const PALETTE_LIST_START_ROW: usize = BODY_START_ROW + SEARCH_BAR_HEIGHT;

/// Columns between the left edge and a result title.
pub const ITEM_INDENT: usize = 4;

/// Rows left for palette results after chrome.
///
/// Blank, header, border, three-line search bar, bottom border and footer,
/// plus one spare row above the footer.
#[must_use]
pub const fn palette_list_height(rows: usize) -> usize {
    rows.saturating_sub(9)
}

/// Last screen row available to the body.
#[must_use]
pub const fn body_end_row(rows: usize) -> usize {
    rows.saturating_sub(3)
}

/// What a pointer click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// The `Search` hint in the header.
    SearchAffordance,
    /// A palette result, by flat index.
    ResultRow(usize),
    /// A page link in the sidebar.
    SidebarEntry(Destination),
}

/// Pointer gesture reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Hover,
    Click,
}

impl HitTarget {
    /// Palette event for `pointer` landing on this target.
    ///
    /// Hovering a result selects it and clicking activates it; a click on
    /// the header hint opens the palette. Sidebar entries route the portal
    /// directly and have no palette event.
    #[must_use]
    pub fn palette_event(&self, pointer: Pointer) -> Option<Event> {
        match (self, pointer) {
            (Self::ResultRow(flat), Pointer::Hover) => Some(Event::Hover(*flat)),
            (Self::ResultRow(flat), Pointer::Click) => Some(Event::Click(*flat)),
            (Self::SearchAffordance, Pointer::Click) => Some(Event::Open),
            _ => None,
        }
    }
}

/// Resolves a pointer position at 0-based pane coordinates.
///
/// The palette list is resolved through the same viewport window the last
/// render used, so clicks match what is on screen.
#[must_use]
pub fn hit_test(state: &AppState, rows: usize, cols: usize, line: usize, col: usize) -> Option<HitTarget> {
    let screen_row = line + 1;

    if screen_row == HEADER_ROW {
        let hint_len = search_hint_width(state);
        return (col + hint_len >= cols).then_some(HitTarget::SearchAffordance);
    }

    if state.is_palette_open() {
        let list_end = PALETTE_LIST_START_ROW + palette_list_height(rows);
        if !(PALETTE_LIST_START_ROW..list_end).contains(&screen_row) {
            return None;
        }
        let results = state.palette.results();
        let window = state.viewport.visible_range(results.display_len());
        let row = window.start + (screen_row - PALETTE_LIST_START_ROW);
        if row >= window.end {
            return None;
        }
        return results.flat_index_at_row(row).map(HitTarget::ResultRow);
    }

    if SidebarMode::for_width(cols) == SidebarMode::Expanded
        && col < SidebarMode::WIDTH
        && (BODY_START_ROW..=body_end_row(rows)).contains(&screen_row)
    {
        return sidebar_destination_at(state, screen_row - BODY_START_ROW)
            .map(HitTarget::SidebarEntry);
    }

    None
}

fn search_hint_width(state: &AppState) -> usize {
    format!(" Search  {} ", state.lifecycle.shortcut()).chars().count()
}

/// Sidebar line layout: per category one heading, its items, then a blank.
fn sidebar_destination_at(state: &AppState, offset: usize) -> Option<Destination> {
    let mut line = 0;
    for group in crate::search::group(&state.catalogue).groups() {
        // heading
        line += 1;
        if offset < line {
            return None;
        }
        if offset < line + group.items.len() {
            return Some(group.items[offset - line].destination.clone());
        }
        line += group.items.len() + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::catalogue::Catalogue;
    use crate::domain::IndexEntry;
    use crate::ui::Theme;

    fn state() -> AppState {
        let catalogue = Catalogue::new(vec![
            IndexEntry::new("Home", "/", "General"),
            IndexEntry::new(
                "Backend Services Architecture",
                "/backend-services",
                "Architecture",
            ),
            IndexEntry::new("Glossary", "/glossary", "Reference"),
        ])
        .unwrap();
        AppState::new(catalogue, Theme::default())
    }

    #[test]
    fn hovering_a_result_row_selects_it() {
        let mut state = state();
        handle_event(&mut state, &Event::Open).unwrap();
        state.viewport.resize(palette_list_height(24));

        // line 9 is screen row 10: Backend, below the Architecture heading.
        let target = hit_test(&state, 24, 80, 9, 10).unwrap();
        assert_eq!(target, HitTarget::ResultRow(1));

        let event = target.palette_event(Pointer::Hover).unwrap();
        let (render, _) = handle_event(&mut state, &event).unwrap();
        assert!(render);
        assert_eq!(state.palette.selected(), 1);
        assert!(state.is_palette_open());
    }

    #[test]
    fn pointer_events_per_target() {
        assert_eq!(
            HitTarget::ResultRow(2).palette_event(Pointer::Click),
            Some(Event::Click(2))
        );
        assert_eq!(
            HitTarget::SearchAffordance.palette_event(Pointer::Click),
            Some(Event::Open)
        );
        assert_eq!(HitTarget::SearchAffordance.palette_event(Pointer::Hover), None);
        assert_eq!(
            HitTarget::SidebarEntry(Destination::new("/")).palette_event(Pointer::Click),
            None
        );
    }

    #[test]
    fn header_hint_opens_palette() {
        let state = state();
        assert_eq!(hit_test(&state, 24, 80, 1, 79), Some(HitTarget::SearchAffordance));
        assert_eq!(hit_test(&state, 24, 80, 1, 10), None);
    }

    #[test]
    fn palette_rows_resolve_to_flat_indices() {
        let mut state = state();
        handle_event(&mut state, &Event::Open).unwrap();
        state.viewport.resize(palette_list_height(24));

        // line 6 is screen row 7: the "General" heading.
        assert_eq!(hit_test(&state, 24, 80, 6, 5), None);
        assert_eq!(hit_test(&state, 24, 80, 7, 5), Some(HitTarget::ResultRow(0)));
        assert_eq!(hit_test(&state, 24, 80, 9, 5), Some(HitTarget::ResultRow(1)));
        assert_eq!(hit_test(&state, 24, 80, 11, 5), Some(HitTarget::ResultRow(2)));
        assert_eq!(hit_test(&state, 24, 80, 12, 5), None);
    }

    #[test]
    fn sidebar_links_resolve_when_expanded() {
        let state = state();
        // screen rows: General(4) Home(5) blank(6) Architecture(7) Backend(8)
        assert_eq!(
            hit_test(&state, 24, 100, 4, 2),
            Some(HitTarget::SidebarEntry(Destination::new("/")))
        );
        assert_eq!(hit_test(&state, 24, 100, 5, 2), None);
        assert_eq!(
            hit_test(&state, 24, 100, 7, 2),
            Some(HitTarget::SidebarEntry(Destination::new("/backend-services")))
        );
        assert_eq!(hit_test(&state, 24, 60, 4, 2), None);
    }
}
