//! End-to-end palette flows driven through `handle_event`, the same way the
//! plugin shim drives them.

use docportal::app::{Key, KeyPress};
use docportal::search::{rank, score};
use docportal::{handle_event, Action, AppState, Catalogue, Event, FocusToken, IndexEntry, Theme};

fn catalogue() -> Catalogue {
    Catalogue::new(vec![
        IndexEntry::new("Home", "/", "General"),
        IndexEntry::new(
            "Backend Services Architecture",
            "/backend-services",
            "Architecture",
        ),
        IndexEntry::new("Glossary", "/glossary", "Reference"),
    ])
    .unwrap()
}

fn state() -> AppState {
    let mut state = AppState::new(catalogue(), Theme::default());
    state.lifecycle.install();
    state
}

fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

fn titles(state: &AppState) -> Vec<String> {
    state
        .palette
        .results()
        .iter_flat()
        .map(|entry| entry.title.clone())
        .collect()
}

/// Opens the palette and delivers the focus timer, returning its token.
fn open_focused(state: &mut AppState) -> FocusToken {
    let actions = send(state, Event::Open);
    let token = actions
        .iter()
        .find_map(|action| match action {
            Action::ScheduleFocus { token, .. } => Some(*token),
            _ => None,
        })
        .expect("open schedules focus");
    assert_eq!(send(state, Event::FocusElapsed(token)), vec![Action::FocusInput]);
    token
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Key(KeyPress::plain(Key::Char(c))));
    }
}

#[test]
fn empty_query_lists_catalogue_in_order() {
    let mut state = state();
    send(&mut state, Event::Open);

    assert_eq!(
        titles(&state),
        vec!["Home", "Backend Services Architecture", "Glossary"]
    );
    assert_eq!(state.palette.selected(), 0);
}

#[test]
fn exact_title_query_returns_single_result() {
    let mut state = state();
    open_focused(&mut state);
    type_text(&mut state, "home");

    assert_eq!(titles(&state), vec!["Home"]);
}

#[test]
fn title_contains_query() {
    let mut state = state();
    send(&mut state, Event::Open);
    send(&mut state, Event::QueryChanged("arch".to_string()));

    assert_eq!(titles(&state), vec!["Backend Services Architecture"]);
}

#[test]
fn subsequence_query_keeps_only_title_subsequences() {
    let mut state = state();
    send(&mut state, Event::Open);
    send(&mut state, Event::QueryChanged("bknd".to_string()));

    assert_eq!(titles(&state), vec!["Backend Services Architecture"]);
}

/// Only the Backend and Glossary entries contain an "a" anywhere.
fn two_hit_catalogue() -> Catalogue {
    Catalogue::new(vec![
        IndexEntry::new("Home", "/", "Intro"),
        IndexEntry::new(
            "Backend Services Architecture",
            "/backend-services",
            "Architecture",
        ),
        IndexEntry::new("Glossary", "/glossary", "Reference"),
    ])
    .unwrap()
}

#[test]
fn move_down_clamps_at_last_result() {
    let mut state = AppState::new(two_hit_catalogue(), Theme::default());
    state.lifecycle.install();
    send(&mut state, Event::Open);
    send(&mut state, Event::QueryChanged("a".to_string()));
    assert_eq!(
        titles(&state),
        vec!["Backend Services Architecture", "Glossary"]
    );
    assert_eq!(state.palette.selected(), 0);

    let (should_render, _) = handle_event(&mut state, &Event::MoveDown).unwrap();
    assert!(should_render);
    assert_eq!(state.palette.selected(), 1);

    let (should_render, actions) = handle_event(&mut state, &Event::MoveDown).unwrap();
    assert_eq!(state.palette.selected(), 1);
    assert!(!should_render);
    assert!(actions.is_empty());
}

#[test]
fn closed_palette_backspace_key_changes_nothing() {
    let mut state = state();
    assert!(state.navigate(&docportal::Destination::new("/glossary")));

    let (should_render, actions) =
        handle_event(&mut state, &Event::Key(KeyPress::plain(Key::Backspace))).unwrap();

    assert!(!should_render);
    assert!(actions.is_empty());
    assert!(!state.is_palette_open());
    assert_eq!(
        state.portal.current().map(|d| d.as_str()),
        Some("/glossary")
    );
}

#[test]
fn activate_with_no_results_keeps_palette_open() {
    let mut state = state();
    send(&mut state, Event::Open);
    send(&mut state, Event::QueryChanged("zzzz".to_string()));

    let actions = send(&mut state, Event::Activate);

    assert!(actions.is_empty());
    assert!(state.is_palette_open());
}

#[test]
fn keyboard_session_navigates_once_and_closes() {
    let mut state = state();
    let shortcut = KeyPress::ctrl(Key::Char('k'));

    send(&mut state, Event::Key(shortcut));
    assert!(state.is_palette_open());

    // Typing before the focus timer fires is dropped.
    type_text(&mut state, "x");
    assert_eq!(state.palette.query(), "");

    let token = state.palette.session().unwrap();
    send(&mut state, Event::FocusElapsed(token));
    type_text(&mut state, "gl");
    send(&mut state, Event::Key(KeyPress::plain(Key::Down)));

    let actions = send(&mut state, Event::Key(KeyPress::plain(Key::Enter)));
    let navigations: Vec<_> = actions
        .iter()
        .filter(|action| matches!(action, Action::Navigate { .. }))
        .collect();

    assert_eq!(navigations.len(), 1);
    assert!(!state.is_palette_open());
    assert_eq!(state.palette.query(), "");
}

#[test]
fn stale_focus_timer_is_discarded() {
    let mut state = state();
    let first = match send(&mut state, Event::Open).first() {
        Some(Action::ScheduleFocus { token, .. }) => *token,
        other => panic!("expected ScheduleFocus, got {other:?}"),
    };
    send(&mut state, Event::Close);
    send(&mut state, Event::Open);

    let (should_render, actions) = handle_event(&mut state, &Event::FocusElapsed(first)).unwrap();

    assert!(!should_render);
    assert!(actions.is_empty());
    assert!(!state.palette.input_focused());
}

#[test]
fn escape_closes_without_navigating() {
    let mut state = state();
    open_focused(&mut state);
    type_text(&mut state, "glo");

    let actions = send(&mut state, Event::Key(KeyPress::plain(Key::Esc)));

    assert!(actions.is_empty());
    assert!(!state.is_palette_open());
    assert_eq!(state.palette.query(), "");
}

#[test]
fn toggle_twice_returns_to_closed() {
    let mut state = state();
    send(&mut state, Event::Toggle);
    send(&mut state, Event::Toggle);

    assert!(!state.is_palette_open());
}

#[test]
fn every_ranked_entry_scores_above_zero() {
    let catalogue = catalogue();
    for query in ["a", "e", "gl", "bknd", "services", "zzz", " home "] {
        for entry in rank(query, &catalogue) {
            assert!(score(query.trim(), entry) > 0, "{query:?} kept {}", entry.title);
        }
    }
}

#[test]
fn selection_stays_in_flattened_range() {
    let mut state = state();
    send(&mut state, Event::Open);

    for query in ["", "a", "zzz", "gloss"] {
        send(&mut state, Event::QueryChanged(query.to_string()));
        for _ in 0..5 {
            send(&mut state, Event::MoveDown);
        }
        for _ in 0..2 {
            send(&mut state, Event::MoveUp);
        }

        let len = state.palette.results().len();
        let selected = state.palette.selected();
        if len == 0 {
            assert_eq!(selected, 0);
        } else {
            assert!(selected < len);
            assert!(state.palette.selected_entry().is_some());
        }
    }
}
