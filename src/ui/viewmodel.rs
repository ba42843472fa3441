//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `compute_viewmodel()` and
//! consumed by the renderer. They carry display-ready data only: truncated
//! text, highlight ranges, selection flags and the already-windowed slice of
//! palette rows.
//!
//! # Example
//!
//! ```rust
//! use docportal::ui::viewmodel::{DisplayItem, PaletteRow};
//!
//! let row = PaletteRow::Item(DisplayItem {
//!     flat_index: 0,
//!     title: "Glossary".to_string(),
//!     description: "Terms used across the platform".to_string(),
//!     is_selected: true,
//!     highlight_ranges: vec![(0, 4)],
//! });
//! assert!(matches!(row, PaletteRow::Item(_)));
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub footer: FooterInfo,
    pub body: Body,
}

/// What fills the area between header and footer.
#[derive(Debug, Clone)]
pub enum Body {
    /// The routed page with its sidebar.
    Page(PageView),
    /// The command palette overlay.
    Palette(PaletteView),
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, usually the portal name and current page.
    pub title: String,

    /// Right-aligned search affordance, e.g. `Search  Ctrl+k`.
    ///
    /// Clicking it opens the palette.
    pub search_hint: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Routed page layout.
#[derive(Debug, Clone)]
pub struct PageView {
    /// `None` when the pane is too narrow for a sidebar.
    pub sidebar: Option<SidebarView>,
    pub content: ContentView,
}

#[derive(Debug, Clone)]
pub struct SidebarView {
    pub sections: Vec<SidebarSection>,
}

/// One category in the sidebar.
#[derive(Debug, Clone)]
pub struct SidebarSection {
    pub category: String,
    pub items: Vec<SidebarItem>,
}

#[derive(Debug, Clone)]
pub struct SidebarItem {
    pub title: String,
    pub is_current: bool,
}

/// The page body. Only catalogue metadata is shown.
#[derive(Debug, Clone)]
pub enum ContentView {
    Entry {
        title: String,
        category: String,
        destination: String,
        description: String,
        keywords: Vec<String>,
    },
    Empty(EmptyState),
}

/// The palette overlay: query bar plus the visible window of rows.
#[derive(Debug, Clone)]
pub struct PaletteView {
    pub search_bar: SearchBarInfo,

    /// Rows inside the viewport, in display order.
    pub rows: Vec<PaletteRow>,

    /// Set when the query matched nothing.
    pub empty_state: Option<EmptyState>,

    /// Total number of results, not just the visible ones.
    pub result_count: usize,
}

/// A rendered palette row.
#[derive(Debug, Clone)]
pub enum PaletteRow {
    /// Category heading above a group of results.
    Heading(String),
    Item(DisplayItem),
}

/// One result row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Position of this result in the flat ordering.
    pub flat_index: usize,

    pub title: String,

    pub description: String,

    pub is_selected: bool,

    /// Character ranges of `title` to highlight.
    ///
    /// Each tuple is `(start_index, end_index)` in char indices, end
    /// exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// Whether to draw the input cursor.
    pub focused: bool,
}

/// Message shown in place of an empty list or page.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
