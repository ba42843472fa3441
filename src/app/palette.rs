//! Command palette navigation state.
//!
//! [`Palette`] is the only mutable state the palette has. It is reset on every
//! closed → open transition and discarded on close, so nothing survives from
//! one open session to the next.
//!
//! # Selection
//!
//! `selected` is a flat index into the current [`GroupedResults`] and is kept
//! in `[0, max(0, len - 1)]` at all times. Movement clamps at both ends and
//! never wraps. Mutators return whether the selection changed so the caller
//! can ask the host to scroll the selected row into view.

use super::modes::PaletteMode;
use crate::catalogue::Catalogue;
use crate::domain::{Destination, IndexEntry};
use crate::search::{self, GroupedResults};

/// Identifies one open session of the palette.
///
/// Issued on open and carried by the deferred focus request, so a request
/// raised by an earlier session can be told apart and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusToken(pub u64);

/// Palette state machine.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    mode: PaletteMode,
    query: String,
    selected: usize,
    results: GroupedResults,
    session: Option<FocusToken>,
    input_focused: bool,
}

impl Palette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(&self) -> PaletteMode {
        self.mode
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.mode.is_open()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current flat selection index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn results(&self) -> &GroupedResults {
        &self.results
    }

    /// Whether the deferred focus request for this session has landed.
    #[must_use]
    pub const fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// Token of the current open session.
    #[must_use]
    pub const fn session(&self) -> Option<FocusToken> {
        self.session
    }

    /// Opens the palette with an empty query over the whole catalogue.
    ///
    /// Resets the query and selection whether or not the palette was already
    /// open, and starts a new focus session under `token`.
    pub fn open(&mut self, catalogue: &Catalogue, token: FocusToken) {
        self.mode = PaletteMode::Open;
        self.query.clear();
        self.selected = 0;
        self.results = search::search("", catalogue);
        self.session = Some(token);
        self.input_focused = false;
        tracing::debug!(token = token.0, results = self.results.len(), "palette opened");
    }

    /// Closes the palette and discards every piece of session state.
    pub fn close(&mut self) {
        tracing::debug!(query = %self.query, "palette closed");
        *self = Self::default();
    }

    /// Replaces the query, recomputes results and resets the selection.
    ///
    /// Returns `false` without doing anything if the palette is closed.
    pub fn set_query(&mut self, query: impl Into<String>, catalogue: &Catalogue) -> bool {
        if !self.is_open() {
            return false;
        }
        self.query = query.into();
        self.results = search::search(&self.query, catalogue);
        self.selected = 0;
        tracing::trace!(query = %self.query, results = self.results.len(), "query changed");
        true
    }

    /// Moves the selection one item down, stopping at the last item.
    pub fn move_down(&mut self) -> bool {
        let last = self.results.len().saturating_sub(1);
        let next = (self.selected + 1).min(last);
        self.select(next)
    }

    /// Moves the selection one item up, stopping at the first item.
    pub fn move_up(&mut self) -> bool {
        self.select(self.selected.saturating_sub(1))
    }

    /// Points the selection at `flat` directly. Out-of-range indices are
    /// ignored.
    pub fn hover(&mut self, flat: usize) -> bool {
        if flat >= self.results.len() {
            tracing::trace!(flat, len = self.results.len(), "hover outside results ignored");
            return false;
        }
        self.select(flat)
    }

    fn select(&mut self, flat: usize) -> bool {
        if !self.is_open() || flat == self.selected {
            return false;
        }
        self.selected = flat;
        true
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&IndexEntry> {
        self.results.get(self.selected)
    }

    /// Rendered row of the current selection, headings included.
    #[must_use]
    pub fn selected_row(&self) -> Option<usize> {
        self.results.display_row(self.selected)
    }

    /// Closes the palette and returns the selected destination.
    ///
    /// With no results this is a no-op: the palette stays open and `None` is
    /// returned.
    pub fn activate(&mut self) -> Option<Destination> {
        if !self.is_open() {
            return None;
        }
        let destination = self.selected_entry()?.destination.clone();
        self.close();
        Some(destination)
    }

    /// Applies a deferred focus request.
    ///
    /// Succeeds only while open and only for the token of the current session.
    pub fn focus_input(&mut self, token: FocusToken) -> bool {
        if self.is_open() && self.session == Some(token) {
            self.input_focused = true;
            true
        } else {
            false
        }
    }
}
