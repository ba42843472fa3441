//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the immutable
//! catalogue, the palette state machine, the shortcut owner, the portal route
//! and the palette scroll window.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel). While the palette is
//! open the body is the palette overlay, windowed by the viewport; otherwise
//! it is the routed page with a sidebar that collapses on narrow panes.
//!
//! # Example
//!
//! ```rust
//! use docportal::app::AppState;
//! use docportal::catalogue::Catalogue;
//! use docportal::ui::Theme;
//!
//! let state = AppState::new(Catalogue::builtin(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.header.title.contains("Home"));
//! ```

use super::lifecycle::LifecycleController;
use super::modes::SidebarMode;
use super::palette::Palette;
use super::portal::PortalState;
use crate::catalogue::Catalogue;
use crate::domain::{Destination, IndexEntry};
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, ContentView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, PageView, PaletteRow,
    PaletteView, SearchBarInfo, SidebarItem, SidebarSection, SidebarView, UIViewModel,
};
use crate::ui::Viewport;
use fuzzy_matcher::skim::SkimMatcherV2;

const PORTAL_TITLE: &str = "Docs";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Searchable destinations. Never changes after load.
    pub catalogue: Catalogue,

    /// Palette state machine; empty while closed.
    pub palette: Palette,

    /// Shortcut binding and focus-token source.
    pub lifecycle: LifecycleController,

    /// Current page and back-history.
    pub portal: PortalState,

    /// Scroll window over the palette rows.
    ///
    /// Reset on every open; moved by `ScrollIntoView` actions and by the
    /// renderer when the pane is resized.
    pub viewport: Viewport,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates state with the default shortcut, starting on the first
    /// catalogue entry.
    #[must_use]
    pub fn new(catalogue: Catalogue, theme: Theme) -> Self {
        Self::with_lifecycle(catalogue, theme, LifecycleController::default(), None)
    }

    /// Creates state with an explicit lifecycle controller and landing page.
    ///
    /// A `home` the catalogue does not know falls back to the first entry.
    #[must_use]
    pub fn with_lifecycle(
        catalogue: Catalogue,
        theme: Theme,
        lifecycle: LifecycleController,
        home: Option<Destination>,
    ) -> Self {
        let home = home
            .filter(|d| catalogue.get(d).is_some())
            .or_else(|| catalogue.first().map(|e| e.destination.clone()));

        Self {
            catalogue,
            palette: Palette::new(),
            lifecycle,
            portal: PortalState::new(home),
            viewport: Viewport::default(),
            theme,
        }
    }

    #[must_use]
    pub const fn is_palette_open(&self) -> bool {
        self.palette.is_open()
    }

    /// Routes the portal, as the host does for `Action::Navigate`.
    pub fn navigate(&mut self, destination: &Destination) -> bool {
        self.portal.navigate(destination, &self.catalogue)
    }

    /// Scrolls the palette list so `row` is visible, as the host does for
    /// `Action::ScrollIntoView`.
    ///
    /// The first item of a group pulls its category heading into view too.
    pub fn scroll_into_view(&mut self, row: usize) -> bool {
        let results = self.palette.results();
        let heading_above = row > 0
            && results.flat_index_at_row(row).is_some()
            && results.flat_index_at_row(row - 1).is_none();

        if heading_above {
            self.viewport.reveal_range(row - 1..row + 1)
        } else {
            self.viewport.reveal(row)
        }
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&IndexEntry> {
        self.portal.current().and_then(|d| self.catalogue.get(d))
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// Palette rows are windowed by the current viewport; callers that want
    /// the selection on screen call `viewport.reveal` first, as
    /// [`render`](crate::ui::render) does.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = if self.palette.is_open() {
            Body::Palette(self.compute_palette(rows, cols))
        } else {
            Body::Page(self.compute_page(cols))
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            body,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = self.current_entry().map_or_else(
            || format!(" {PORTAL_TITLE} "),
            |entry| format!(" {PORTAL_TITLE} / {} ", entry.title),
        );
        HeaderInfo {
            title,
            search_hint: format!(" Search  {} ", self.lifecycle.shortcut()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let shortcut = self.lifecycle.shortcut();
        let keybindings = if self.palette.is_open() {
            format!("↑/↓: navigate  Enter: open  Esc: cancel  {shortcut}: close  Type to search")
        } else {
            format!("{shortcut}: search  Backspace: back  Click Search to open palette")
        };
        FooterInfo { keybindings }
    }

    fn compute_page(&self, cols: usize) -> PageView {
        let sidebar = match SidebarMode::for_width(cols) {
            SidebarMode::Expanded => Some(self.compute_sidebar()),
            SidebarMode::Collapsed => None,
        };

        let content = self.current_entry().map_or_else(
            || {
                ContentView::Empty(EmptyState {
                    message: "Nothing to show".to_string(),
                    subtitle: format!("Press {} to search the docs", self.lifecycle.shortcut()),
                })
            },
            |entry| ContentView::Entry {
                title: entry.title.clone(),
                category: entry.category.clone(),
                destination: entry.destination.to_string(),
                description: entry.description.clone(),
                keywords: entry.keywords.clone(),
            },
        );

        PageView { sidebar, content }
    }

    fn compute_sidebar(&self) -> SidebarView {
        let current = self.portal.current();
        let sections = crate::search::group(&self.catalogue)
            .groups()
            .iter()
            .map(|group| SidebarSection {
                category: group.category.clone(),
                items: group
                    .items
                    .iter()
                    .map(|entry| SidebarItem {
                        title: entry.title.clone(),
                        is_current: current == Some(&entry.destination),
                    })
                    .collect(),
            })
            .collect();
        SidebarView { sections }
    }

    fn compute_palette(&self, rows: usize, cols: usize) -> PaletteView {
        let results = self.palette.results();
        let query = self.palette.query();

        let search_bar = SearchBarInfo {
            query: query.to_string(),
            focused: self.palette.input_focused(),
        };

        if results.is_empty() {
            return PaletteView {
                search_bar,
                rows: vec![],
                empty_state: Some(EmptyState {
                    message: format!("No results for «{query}»"),
                    subtitle: "Try a shorter or different query".to_string(),
                }),
                result_count: 0,
            };
        }

        let matcher = if query.trim().is_empty() {
            None
        } else {
            // Ranking is case-insensitive, so highlighting must be too.
            Some(SkimMatcherV2::default().ignore_case())
        };

        let mut all_rows = Vec::with_capacity(results.display_len());
        let mut flat_index = 0;
        for group in results.groups() {
            all_rows.push(PaletteRow::Heading(group.category.clone()));
            for entry in &group.items {
                all_rows.push(PaletteRow::Item(self.compute_display_item(
                    entry,
                    flat_index,
                    cols,
                    matcher.as_ref(),
                )));
                flat_index += 1;
            }
        }

        let mut viewport = self.viewport;
        viewport.resize(layout::palette_list_height(rows));
        let visible = viewport.visible_range(all_rows.len());
        let visible_rows = all_rows.drain(visible).collect();

        PaletteView {
            search_bar,
            rows: visible_rows,
            empty_state: None,
            result_count: results.len(),
        }
    }

    fn compute_display_item(
        &self,
        entry: &IndexEntry,
        flat_index: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let title_width = cols.saturating_sub(layout::ITEM_INDENT + 2);
        let title = truncate(&entry.title, title_width);
        let description_width =
            cols.saturating_sub(layout::ITEM_INDENT + 4 + title.chars().count());

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            self.compute_highlight_ranges(&title, m)
        });

        DisplayItem {
            flat_index,
            title,
            description: truncate(&entry.description, description_width),
            is_selected: flat_index == self.palette.selected(),
            highlight_ranges,
        }
    }

    /// Coalesces matched char indices from the fuzzy matcher into
    /// `(start, end)` runs.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, self.palette.query().trim())
        else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }
}

/// Shortens `text` to `max` chars, ending in `...` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};

    fn catalogue() -> Catalogue {
        Catalogue::new(vec![
            IndexEntry::new("Home", "/", "General").with_description("Landing page"),
            IndexEntry::new(
                "Backend Services Architecture",
                "/backend-services",
                "Architecture",
            ),
            IndexEntry::new("Glossary", "/glossary", "Reference"),
        ])
        .unwrap()
    }

    fn palette_view(state: &AppState, rows: usize) -> PaletteView {
        match state.compute_viewmodel(rows, 80).body {
            Body::Palette(view) => view,
            Body::Page(_) => panic!("expected palette body"),
        }
    }

    #[test]
    fn starts_on_first_entry() {
        let state = AppState::new(catalogue(), Theme::default());
        assert_eq!(state.current_entry().map(|e| e.title.as_str()), Some("Home"));
    }

    #[test]
    fn unknown_home_falls_back_to_first_entry() {
        let state = AppState::with_lifecycle(
            catalogue(),
            Theme::default(),
            LifecycleController::default(),
            Some(Destination::new("/missing")),
        );
        assert_eq!(state.portal.current(), Some(&Destination::new("/")));
    }

    #[test]
    fn page_body_with_sidebar_marks_current() {
        let state = AppState::new(catalogue(), Theme::default());
        let Body::Page(page) = state.compute_viewmodel(24, 100).body else {
            panic!("expected page body");
        };
        let sidebar = page.sidebar.unwrap();
        assert_eq!(sidebar.sections.len(), 3);
        assert!(sidebar.sections[0].items[0].is_current);
        assert!(!sidebar.sections[1].items[0].is_current);
        assert!(matches!(page.content, ContentView::Entry { ref title, .. } if title == "Home"));
    }

    #[test]
    fn narrow_pane_collapses_sidebar() {
        let state = AppState::new(catalogue(), Theme::default());
        let Body::Page(page) = state.compute_viewmodel(24, 40).body else {
            panic!("expected page body");
        };
        assert!(page.sidebar.is_none());
    }

    #[test]
    fn palette_rows_include_headings() {
        let mut state = AppState::new(catalogue(), Theme::default());
        handle_event(&mut state, &Event::Open).unwrap();
        let view = palette_view(&state, 24);

        assert_eq!(view.result_count, 3);
        assert_eq!(view.rows.len(), 6);
        assert!(matches!(&view.rows[0], PaletteRow::Heading(c) if c == "General"));
        assert!(matches!(&view.rows[1], PaletteRow::Item(item) if item.is_selected));
    }

    #[test]
    fn empty_results_show_query() {
        let mut state = AppState::new(catalogue(), Theme::default());
        handle_event(&mut state, &Event::Open).unwrap();
        handle_event(&mut state, &Event::QueryChanged("zzz".into())).unwrap();
        let view = palette_view(&state, 24);
        assert!(view.rows.is_empty());
        assert_eq!(view.empty_state.unwrap().message, "No results for «zzz»");
    }

    #[test]
    fn rows_are_windowed_by_viewport() {
        let mut state = AppState::new(Catalogue::builtin(), Theme::default());
        handle_event(&mut state, &Event::Open).unwrap();
        // 12 rows tall leaves 3 list rows.
        let view = palette_view(&state, 12);
        assert_eq!(view.rows.len(), 3);

        state.viewport.resize(3);
        state.viewport.reveal(5);
        let view = palette_view(&state, 12);
        assert!(matches!(&view.rows[2], PaletteRow::Item(item) if item.flat_index == 3));
    }

    #[test]
    fn scrolling_back_to_first_item_shows_its_heading() {
        let mut state = AppState::new(Catalogue::builtin(), Theme::default());
        handle_event(&mut state, &Event::Open).unwrap();
        state.viewport.resize(3);

        for _ in 0..6 {
            let (_, actions) = handle_event(&mut state, &Event::MoveDown).unwrap();
            scroll(&mut state, &actions);
        }
        assert!(state.viewport.offset() > 0);

        for _ in 0..6 {
            let (_, actions) = handle_event(&mut state, &Event::MoveUp).unwrap();
            scroll(&mut state, &actions);
        }

        assert_eq!(state.palette.selected(), 0);
        let view = palette_view(&state, 12);
        assert!(matches!(&view.rows[0], PaletteRow::Heading(c) if c == "General"));
        assert!(matches!(&view.rows[1], PaletteRow::Item(item) if item.is_selected));
    }

    fn scroll(state: &mut AppState, actions: &[crate::app::Action]) {
        for action in actions {
            if let crate::app::Action::ScrollIntoView { row } = action {
                state.scroll_into_view(*row);
            }
        }
    }

    #[test]
    fn highlight_ranges_are_coalesced() {
        let mut state = AppState::new(catalogue(), Theme::default());
        handle_event(&mut state, &Event::Open).unwrap();
        handle_event(&mut state, &Event::QueryChanged("gloss".into())).unwrap();
        let view = palette_view(&state, 24);
        let PaletteRow::Item(item) = &view.rows[1] else {
            panic!("expected item row");
        };
        assert_eq!(item.highlight_ranges, vec![(0, 5)]);
    }

    #[test]
    fn uppercase_query_still_highlights() {
        let mut state = AppState::new(catalogue(), Theme::default());
        handle_event(&mut state, &Event::Open).unwrap();
        handle_event(&mut state, &Event::QueryChanged("GLOSS".into())).unwrap();
        let view = palette_view(&state, 24);
        let PaletteRow::Item(item) = &view.rows[1] else {
            panic!("expected item row");
        };
        assert_eq!(item.title, "Glossary");
        assert_eq!(item.highlight_ranges, vec![(0, 5)]);
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("Glossary", 20), "Glossary");
        assert_eq!(truncate("Glossary", 6), "Glo...");
        assert_eq!(truncate("Glossary", 2), "Gl");
    }
}
