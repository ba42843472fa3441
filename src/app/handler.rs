//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that can change
//! the palette or the portal: raw key presses, pointer input, host API calls
//! and the deferred focus timer. It mutates [`AppState`] and returns whether a
//! re-render is needed plus the side effects for the host to run.
//!
//! # Event Types
//!
//! - **Raw input**: `Key` (translated by the lifecycle controller)
//! - **Palette lifecycle**: `Toggle`, `Open`, `Close`, `Cancel`
//! - **Navigation**: `MoveDown`, `MoveUp`, `Hover`, `Activate`, `Click`
//! - **Query**: `QueryChanged`, `Char`, `Backspace`
//! - **Timers**: `FocusElapsed`
//! - **Portal shell**: `Back`
//!
//! # Example
//!
//! ```rust
//! use docportal::app::{handle_event, AppState, Event};
//! use docportal::catalogue::Catalogue;
//! use docportal::ui::Theme;
//!
//! let mut state = AppState::new(Catalogue::builtin(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Open)?;
//! assert!(should_render);
//! assert!(state.is_palette_open());
//! assert!(!actions.is_empty());
//! # Ok::<(), docportal::DocportalError>(())
//! ```

use super::lifecycle::KeyPress;
use super::palette::FocusToken;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Raw key press from the host, before shortcut translation.
    Key(KeyPress),

    /// The palette shortcut: opens when closed, closes when open.
    Toggle,
    /// Opens the palette. No-op if already open.
    Open,
    /// Closes the palette without navigating. No-op if already closed.
    Close,
    /// Escape inside the palette. Same effect as `Close`.
    Cancel,

    /// Selects the next result, stopping at the last.
    MoveDown,
    /// Selects the previous result, stopping at the first.
    MoveUp,
    /// Navigates to the selected result and closes. No-op with no results.
    Activate,
    /// Pointer moved over the result at this flat index.
    Hover(usize),
    /// Pointer clicked the result at this flat index.
    Click(usize),

    /// Replaces the whole query text.
    QueryChanged(String),
    /// Appends one character to the query. Needs a focused input.
    Char(char),
    /// Removes the last query character. Needs a focused input.
    Backspace,

    /// The focus timer for a palette session fired.
    FocusElapsed(FocusToken),

    /// Portal history: return to the previous page.
    Back,
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// `(should_render, actions)`. Events that change nothing return
/// `(false, vec![])`.
///
/// # Errors
///
/// No palette transition currently fails; the `Result` keeps the handler
/// signature uniform with the rest of the crate.
///
/// # Scroll Synchronisation
///
/// Every transition that changes the selected index, including the resets on
/// open and on query edits, emits [`Action::ScrollIntoView`] for the newly
/// selected row.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Key(press) => {
            let open = state.palette.is_open();
            match state.lifecycle.translate(press, open) {
                Some(translated) => handle_event(state, &translated),
                None => Ok((false, vec![])),
            }
        }
        Event::Toggle => {
            if state.palette.is_open() {
                Ok(close_palette(state))
            } else {
                Ok(open_palette(state))
            }
        }
        Event::Open => Ok(open_palette(state)),
        Event::Close | Event::Cancel => Ok(close_palette(state)),
        Event::MoveDown => {
            let changed = state.palette.move_down();
            Ok(selection_changed(state, changed))
        }
        Event::MoveUp => {
            let changed = state.palette.move_up();
            Ok(selection_changed(state, changed))
        }
        Event::Hover(flat) => {
            let changed = state.palette.hover(*flat);
            Ok(selection_changed(state, changed))
        }
        Event::Activate => Ok(activate(state)),
        Event::Click(flat) => {
            if *flat >= state.palette.results().len() {
                tracing::debug!(flat, "click outside results ignored");
                return Ok((false, vec![]));
            }
            state.palette.hover(*flat);
            Ok(activate(state))
        }
        Event::QueryChanged(text) => Ok(replace_query(state, text.clone())),
        Event::Char(c) => {
            if !state.palette.input_focused() {
                tracing::trace!(char = %c, "query input not focused, dropping key");
                return Ok((false, vec![]));
            }
            let mut query = state.palette.query().to_string();
            query.push(*c);
            Ok(replace_query(state, query))
        }
        Event::Backspace => {
            if !state.palette.input_focused() || state.palette.query().is_empty() {
                return Ok((false, vec![]));
            }
            let mut query = state.palette.query().to_string();
            query.pop();
            Ok(replace_query(state, query))
        }
        Event::FocusElapsed(token) => {
            if state.palette.focus_input(*token) {
                tracing::debug!(token = token.0, "query input focused");
                Ok((true, vec![Action::FocusInput]))
            } else {
                tracing::debug!(token = token.0, "discarding stale focus request");
                Ok((false, vec![]))
            }
        }
        Event::Back => {
            if state.palette.is_open() {
                return Ok((false, vec![]));
            }
            Ok((state.portal.back(), vec![]))
        }
    }
}

fn open_palette(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.palette.is_open() {
        return (false, vec![]);
    }

    let token = state.lifecycle.next_focus_token();
    state.palette.open(&state.catalogue, token);
    state.viewport.reset();

    let mut actions = vec![Action::ScheduleFocus {
        token,
        delay: state.lifecycle.focus_delay(),
    }];
    actions.extend(scroll_to_selection(state));
    (true, actions)
}

fn close_palette(state: &mut AppState) -> (bool, Vec<Action>) {
    if !state.palette.is_open() {
        return (false, vec![]);
    }
    state.palette.close();
    (true, vec![])
}

fn activate(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.palette.activate() {
        Some(destination) => {
            tracing::debug!(destination = %destination, "palette entry activated");
            (true, vec![Action::Navigate { destination }])
        }
        None => {
            tracing::debug!(query = %state.palette.query(), "nothing to activate");
            (false, vec![])
        }
    }
}

fn replace_query(state: &mut AppState, query: String) -> (bool, Vec<Action>) {
    if !state.palette.set_query(query, &state.catalogue) {
        return (false, vec![]);
    }
    (true, scroll_to_selection(state))
}

fn selection_changed(state: &AppState, changed: bool) -> (bool, Vec<Action>) {
    if changed {
        (true, scroll_to_selection(state))
    } else {
        (false, vec![])
    }
}

fn scroll_to_selection(state: &AppState) -> Vec<Action> {
    state
        .palette
        .selected_row()
        .map(|row| Action::ScrollIntoView { row })
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::lifecycle::Key;
    use crate::catalogue::Catalogue;
    use crate::domain::{Destination, IndexEntry};
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
        let mut state = AppState::new(catalogue, Theme::default());
        state.lifecycle.install();
        state
    }

    fn open_and_focus(state: &mut AppState) {
        let (_, actions) = handle_event(state, &Event::Open).unwrap();
        let token = actions
            .iter()
            .find_map(|a| match a {
                Action::ScheduleFocus { token, .. } => Some(*token),
                _ => None,
            })
            .unwrap();
        handle_event(state, &Event::FocusElapsed(token)).unwrap();
    }

    #[test]
    fn open_schedules_focus_and_scrolls_to_first_row() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Open).unwrap();
        assert!(render);
        assert!(matches!(actions[0], Action::ScheduleFocus { .. }));
        assert_eq!(actions[1], Action::ScrollIntoView { row: 1 });
    }

    #[test]
    fn open_twice_is_a_no_op() {
        let mut state = state();
        handle_event(&mut state, &Event::Open).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Open).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn shortcut_toggles_palette() {
        let mut state = state();
        let shortcut = Event::Key(KeyPress::ctrl(Key::Char('k')));
        handle_event(&mut state, &shortcut).unwrap();
        assert!(state.is_palette_open());
        handle_event(&mut state, &shortcut).unwrap();
        assert!(!state.is_palette_open());
    }

    #[test]
    fn move_emits_scroll_only_on_change() {
        let mut state = state();
        handle_event(&mut state, &Event::Open).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::MoveDown).unwrap();
        assert_eq!(actions, vec![Action::ScrollIntoView { row: 3 }]);

        let (render, actions) = handle_event(&mut state, &Event::MoveUp).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ScrollIntoView { row: 1 }]);

        let (render, actions) = handle_event(&mut state, &Event::MoveUp).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn activate_navigates_once_and_closes() {
        let mut state = state();
        handle_event(&mut state, &Event::Open).unwrap();
        handle_event(&mut state, &Event::MoveDown).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        assert_eq!(
            actions,
            vec![Action::Navigate {
                destination: Destination::new("/backend-services")
            }]
        );
        assert!(!state.is_palette_open());
    }

    #[test]
    fn activate_with_no_results_is_a_no_op() {
        let mut state = state();
        handle_event(&mut state, &Event::Open).unwrap();
        handle_event(&mut state, &Event::QueryChanged("zzzz".into())).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.is_palette_open());
    }

    #[test]
    fn cancel_closes_without_navigation() {
        let mut state = state();
        handle_event(&mut state, &Event::Open).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Key(KeyPress::plain(Key::Esc))).unwrap();
        assert!(actions.is_empty());
        assert!(!state.is_palette_open());
    }

    #[test]
    fn typing_requires_focused_input() {
        let mut state = state();
        handle_event(&mut state, &Event::Open).unwrap();
        let (render, _) = handle_event(&mut state, &Event::Char('g')).unwrap();
        assert!(!render);
        assert_eq!(state.palette.query(), "");
    }

    #[test]
    fn typing_edits_query_and_resets_selection() {
        let mut state = state();
        open_and_focus(&mut state);
        handle_event(&mut state, &Event::MoveDown).unwrap();

        for c in "glo".chars() {
            handle_event(&mut state, &Event::Key(KeyPress::plain(Key::Char(c)))).unwrap();
        }
        assert_eq!(state.palette.query(), "glo");
        assert_eq!(state.palette.selected(), 0);
        assert_eq!(state.palette.results().len(), 1);

        handle_event(&mut state, &Event::Key(KeyPress::plain(Key::Backspace))).unwrap();
        assert_eq!(state.palette.query(), "gl");
    }

    #[test]
    fn stale_focus_from_previous_session_is_discarded() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Open).unwrap();
        let Action::ScheduleFocus { token: stale, .. } = actions[0] else {
            panic!("expected focus request");
        };
        handle_event(&mut state, &Event::Close).unwrap();
        handle_event(&mut state, &Event::Open).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::FocusElapsed(stale)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(!state.palette.input_focused());
    }

    #[test]
    fn click_hovers_then_activates() {
        let mut state = state();
        handle_event(&mut state, &Event::Open).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Click(2)).unwrap();
        assert_eq!(
            actions,
            vec![Action::Navigate {
                destination: Destination::new("/glossary")
            }]
        );
    }

    #[test]
    fn click_outside_results_does_nothing() {
        let mut state = state();
        handle_event(&mut state, &Event::Open).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Click(9)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.is_palette_open());
    }

    #[test]
    fn closed_palette_ignores_backspace_key() {
        let mut state = state();
        assert!(state.navigate(&Destination::new("/glossary")));
        let before = state.clone();

        let (render, actions) =
            handle_event(&mut state, &Event::Key(KeyPress::plain(Key::Backspace))).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.portal.current(), before.portal.current());
        assert_eq!(state.portal.history_len(), before.portal.history_len());
        assert!(!state.is_palette_open());
        assert_eq!(state.palette.query(), before.palette.query());
    }

    #[test]
    fn back_event_while_closed_returns_to_previous_page() {
        let mut state = state();
        assert!(state.navigate(&Destination::new("/glossary")));
        let (render, _) = handle_event(&mut state, &Event::Back).unwrap();
        assert!(render);
        assert_eq!(state.portal.current(), Some(&Destination::new("/")));
    }

    #[test]
    fn back_event_ignored_while_palette_open() {
        let mut state = state();
        assert!(state.navigate(&Destination::new("/glossary")));
        handle_event(&mut state, &Event::Open).unwrap();
        let (render, _) = handle_event(&mut state, &Event::Back).unwrap();
        assert!(!render);
        assert_eq!(state.portal.current(), Some(&Destination::new("/glossary")));
    }
}
