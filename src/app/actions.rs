//! Side effects emitted by the event handler for the host to carry out.
//!
//! The handler never performs navigation, scrolling or timers itself; it
//! returns a `Vec<Action>` and the plugin runtime executes them in order.
//!
//! # Example
//!
//! ```rust
//! use docportal::app::Action;
//! use docportal::domain::Destination;
//!
//! let actions = vec![Action::Navigate {
//!     destination: Destination::new("/glossary"),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use super::palette::FocusToken;
use crate::domain::Destination;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Routes the portal to `destination`.
    ///
    /// Emitted exactly once per successful activation, and only when the
    /// palette had at least one result.
    Navigate {
        destination: Destination,
    },

    /// Brings the given palette list row into view.
    ///
    /// `row` counts category headings. The host scrolls only if the row is
    /// outside the visible window, and then only as far as the nearest edge.
    ScrollIntoView {
        row: usize,
    },

    /// Starts a one-shot timer; when it fires the host reports
    /// `Event::FocusElapsed(token)`.
    ScheduleFocus {
        token: FocusToken,
        delay: Duration,
    },

    /// The query input of the current session now has focus.
    FocusInput,
}
