//! Portal routing: which page is shown and how to get back.
//!
//! This is the host side of the `navigate(destination)` capability the palette
//! calls into. It only tracks the current destination and a bounded history;
//! page bodies themselves are not modelled.

use crate::catalogue::Catalogue;
use crate::domain::Destination;
use std::collections::VecDeque;

/// Maximum number of pages remembered for [`PortalState::back`].
pub const HISTORY_LIMIT: usize = 32;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalState {
    current: Option<Destination>,
    history: VecDeque<Destination>,
}

impl PortalState {
    #[must_use]
    pub fn new(home: Option<Destination>) -> Self {
        Self {
            current: home,
            history: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Destination> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Routes to `destination` if the catalogue knows it.
    ///
    /// Navigating to the page already shown is accepted but leaves history
    /// untouched. Unknown destinations are ignored.
    pub fn navigate(&mut self, destination: &Destination, catalogue: &Catalogue) -> bool {
        if catalogue.get(destination).is_none() {
            tracing::debug!(destination = %destination, "ignoring navigation to unknown destination");
            return false;
        }
        if self.current.as_ref() == Some(destination) {
            return true;
        }

        if let Some(previous) = self.current.replace(destination.clone()) {
            if self.history.len() == HISTORY_LIMIT {
                self.history.pop_front();
            }
            self.history.push_back(previous);
        }
        tracing::debug!(destination = %destination, history = self.history.len(), "navigated");
        true
    }

    /// Returns to the previous page, if any.
    pub fn back(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                tracing::debug!(destination = %previous, "navigated back");
                self.current = Some(previous);
                true
            }
            None => false,
        }
    }
}
