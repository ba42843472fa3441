//! Mode enums for the palette and the portal shell.
//!
//! # State Machine
//!
//! The palette is either **Closed** or **Open**. Everything else about it
//! (query, selection, results) only exists while it is open.
//!
//! The sidebar is **Expanded** or **Collapsed**, chosen from the pane width
//! on every render rather than stored.
//!
//! # Example
//!
//! ```rust
//! use docportal::app::modes::{PaletteMode, SidebarMode};
//!
//! assert!(PaletteMode::Open.is_open());
//! assert_eq!(SidebarMode::for_width(60), SidebarMode::Collapsed);
//! ```

/// Open/closed state of the command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Palette hidden. Only the toggle shortcut has any effect.
    #[default]
    Closed,

    /// Palette shown. Navigation keys and query edits are live.
    Open,
}

impl PaletteMode {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Sidebar layout for the current pane width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    /// Category tree shown to the left of the content pane.
    Expanded,

    /// Sidebar hidden; the content pane takes the full width.
    Collapsed,
}

impl SidebarMode {
    /// Narrowest pane that still shows the sidebar.
    pub const MIN_WIDTH: usize = 72;

    /// Width reserved for the sidebar when expanded.
    pub const WIDTH: usize = 28;

    #[must_use]
    pub const fn for_width(cols: usize) -> Self {
        if cols >= Self::MIN_WIDTH {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }
}
