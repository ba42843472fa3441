//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the docportal library and the Zellij
//! plugin system: it converts Zellij events into library events, runs the
//! resulting actions against the Zellij API, and remembers the last render
//! size for pointer hit-testing.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`, install
//!    the palette shortcut
//! 2. **Subscribe**: Key, Mouse, Timer and permission events
//! 3. **Update**: Translate events, delegate to `handle_event`, run actions
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key` → `Event::Key(KeyPress)`; the lifecycle controller decides what it
//!   means (shortcut, palette navigation, query typing)
//! - `Mouse(LeftClick)` → hit-test: header hint opens the palette, result rows
//!   activate, sidebar entries navigate
//! - `Mouse(Hover)` over a result row → `Event::Hover`
//! - `Backspace` while the palette is closed → `Event::Back`
//! - `Timer` → `Event::FocusElapsed` for the oldest scheduled focus token
//! - pipe `open` / `close` / `toggle` → `Event::Open` / `Close` / `Toggle`
//!
//! # Keybindings
//!
//! - `Ctrl+k` (configurable): toggle the palette
//! - `Up`/`Down`: move selection
//! - `Enter`: open the selected page
//! - `Esc`: close the palette
//! - `Backspace` (palette closed): previous page

#![allow(clippy::multiple_crate_versions)]

use std::collections::{BTreeMap, VecDeque};
use zellij_tile::prelude::*;

use docportal::app::Key;
use docportal::ui::{HitTarget, Pointer};
use docportal::{handle_event, Action, Config, Event, FocusToken, KeyPress};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: docportal::AppState,

    /// Focus tokens waiting on a Zellij timer, oldest first.
    ///
    /// Zellij timers carry no payload, so tokens are matched to `Timer`
    /// events in scheduling order. Every timer uses the same delay.
    pending_focus: VecDeque<FocusToken>,

    /// Pane size from the last render, for mouse hit-testing.
    rows: usize,
    cols: usize,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: docportal::initialize(&Config::default()),
            pending_focus: VecDeque::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// - `ChangeApplicationState`: focus the plugin pane for query input
    ///
    /// # Subscriptions
    ///
    /// - `Key`: shortcut and palette keys
    /// - `Mouse`: result hover, header/result/sidebar clicks
    /// - `Timer`: deferred input focus
    /// - `PermissionRequestResult`: logged
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        docportal::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(shortcut = %config.shortcut, focus_delay = ?config.focus_delay, "parsed configuration");
        self.app = docportal::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        if self.app.lifecycle.install() {
            tracing::debug!(shortcut = %self.app.lifecycle.shortcut(), "palette shortcut installed");
        }
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                let press = Self::map_key_event(key);
                // Page history is a portal binding, outside the palette's keys.
                if !self.app.is_palette_open() && press == KeyPress::plain(Key::Backspace) {
                    Event::Back
                } else {
                    Event::Key(press)
                }
            }
            zellij_tile::prelude::Event::Mouse(mouse) => return self.handle_mouse(mouse),
            zellij_tile::prelude::Event::Timer(_elapsed) => match self.pending_focus.pop_front() {
                Some(token) => Event::FocusElapsed(token),
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                if matches!(status, PermissionStatus::Denied) {
                    tracing::warn!("permissions denied - query input cannot take focus");
                }
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Accepts `open`, `close` and `toggle` from `zellij pipe` or keybinds,
    /// so other plugins and scripts can drive the palette.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let event = match pipe_message.name.as_str() {
            "open" => Event::Open,
            "close" => Event::Close,
            "toggle" => Event::Toggle,
            other => {
                tracing::debug!(pipe = %other, "ignoring unknown pipe message");
                return false;
            }
        };
        self.dispatch(&event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        docportal::ui::render(&mut self.app, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    self.execute_action(action);
                }
                should_render || !actions.is_empty()
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps a Zellij key to the host-independent press the lifecycle
    /// controller understands.
    fn map_key_event(key: &KeyWithModifier) -> KeyPress {
        let mapped = match key.bare_key {
            BareKey::Char(c) => Key::Char(c),
            BareKey::Up => Key::Up,
            BareKey::Down => Key::Down,
            BareKey::Enter => Key::Enter,
            BareKey::Esc => Key::Esc,
            BareKey::Backspace => Key::Backspace,
            _ => Key::Other,
        };

        KeyPress {
            key: mapped,
            ctrl: key.key_modifiers.contains(&KeyModifier::Ctrl),
            alt: key.key_modifiers.contains(&KeyModifier::Alt),
        }
    }

    /// Routes pointer input by hit-testing it against the last rendered
    /// layout.
    ///
    /// Hovering a result moves the selection. Sidebar clicks navigate
    /// directly; they never pass through the palette.
    fn handle_mouse(&mut self, mouse: Mouse) -> bool {
        let (line, col, pointer) = match mouse {
            Mouse::LeftClick(line, col) => (line, col, Pointer::Click),
            Mouse::Hover(line, col) => (line, col, Pointer::Hover),
            _ => return false,
        };
        let Ok(line) = usize::try_from(line) else {
            return false;
        };

        let Some(target) = docportal::ui::hit_test(&self.app, self.rows, self.cols, line, col) else {
            return false;
        };
        if let Some(event) = target.palette_event(pointer) {
            return self.dispatch(&event);
        }
        match (target, pointer) {
            (HitTarget::SidebarEntry(destination), Pointer::Click) => {
                tracing::debug!(destination = %destination, "sidebar navigation");
                self.app.navigate(&destination)
            }
            _ => false,
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::Navigate { destination } => {
                if !self.app.navigate(destination) {
                    tracing::warn!(destination = %destination, "activated destination not in catalogue");
                }
            }
            Action::ScrollIntoView { row } => {
                self.app.scroll_into_view(*row);
            }
            Action::ScheduleFocus { token, delay } => {
                self.pending_focus.push_back(*token);
                set_timeout(delay.as_secs_f64());
            }
            Action::FocusInput => {
                show_self(false);
            }
        }
    }
}
