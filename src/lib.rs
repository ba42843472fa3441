//! docportal: a Zellij plugin that browses a documentation portal and jumps
//! between its pages through a keyboard-driven command palette.
//!
//! - Static, validated catalogue of pages (built-in or TOML/JSON file)
//! - Priority-ladder fuzzy ranking with stable ordering
//! - Results grouped by category with a flat keyboard cursor
//! - Deferred input focus guarded against stale timers
//! - Sidebar, content pane and back-history for the portal itself

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key translation and shortcut ownership           │
//! │  - Palette navigation                               │
//! │  - Portal routing and view model computation        │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search        │   │ Catalogue     │
//! │ (ui/)         │   │ (search/)     │   │ (catalogue/)  │
//! │ - Rendering   │   │ - Scoring     │   │ - Built-in    │
//! │ - Theming     │   │ - Ranking     │   │ - TOML / JSON │
//! │ - Hit-testing │   │ - Grouping    │   │ - Validation  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Entry model (domain/entry)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: event/action state machine, palette, lifecycle and router
//! - [`catalogue`]: the immutable set of navigable pages
//! - [`search`]: scorer, ranker and grouper
//! - [`domain`]: core types (entries, destinations, errors)
//! - [`infrastructure`]: sandbox paths
//! - [`ui`]: terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/docportal.wasm" {
//!         theme "catppuccin-mocha"
//!         catalogue_file "~/docs/catalogue.toml"
//!         shortcut "ctrl+k"
//!         focus_delay_ms "50"
//!         home "/getting-started"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use docportal::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::Open)?;
//! assert!(state.is_palette_open());
//! assert!(actions.iter().any(|a| matches!(a, Action::ScheduleFocus { .. })));
//!
//! handle_event(&mut state, &Event::QueryChanged("glossary".to_string()))?;
//! let (_, actions) = handle_event(&mut state, &Event::Activate)?;
//! assert!(matches!(&actions[..], [Action::Navigate { destination }] if destination.as_str() == "/glossary"));
//! assert!(!state.is_palette_open());
//! # Ok::<(), docportal::DocportalError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod app;
pub mod catalogue;
pub mod domain;
pub mod infrastructure;
pub mod search;

pub mod ui;

pub mod observability;

pub use app::{
    handle_event, Action, AppState, Event, FocusToken, Key, KeyPress, LifecycleController,
    PaletteMode, Shortcut,
};
pub use catalogue::Catalogue;
pub use domain::{Destination, DocportalError, IndexEntry, Result};
pub use ui::Theme;

use app::lifecycle::DEFAULT_FOCUS_DELAY;
use std::collections::BTreeMap;
use std::time::Duration;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,

    /// TOML or JSON catalogue replacing the built-in one.
    pub catalogue_file: Option<String>,

    /// Key chord that toggles the palette. Default: `Ctrl+k`
    pub shortcut: Shortcut,

    /// Delay between opening the palette and focusing its input.
    pub focus_delay: Duration,

    /// Landing page. Default: the first catalogue entry.
    pub home: Option<Destination>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            catalogue_file: None,
            shortcut: Shortcut::default(),
            focus_delay: DEFAULT_FOCUS_DELAY,
            home: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable values are logged and replaced by their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use docportal::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("shortcut".to_string(), "alt+p".to_string());
    /// map.insert("focus_delay_ms".to_string(), "120".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.shortcut.to_string(), "Alt+p");
    /// assert_eq!(config.focus_delay, Duration::from_millis(120));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let shortcut = config.get("shortcut").map_or_else(Shortcut::default, |raw| {
            Shortcut::parse(raw).unwrap_or_else(|e| {
                tracing::warn!(shortcut = %raw, error = %e, "invalid shortcut, using default");
                Shortcut::default()
            })
        });

        let focus_delay = config
            .get("focus_delay_ms")
            .map_or(DEFAULT_FOCUS_DELAY, |raw| {
                raw.trim().parse::<u64>().map_or_else(
                    |_| {
                        tracing::warn!(focus_delay_ms = %raw, "invalid focus delay, using default");
                        DEFAULT_FOCUS_DELAY
                    },
                    Duration::from_millis,
                )
            });

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            catalogue_file: non_empty("catalogue_file"),
            shortcut,
            focus_delay,
            home: non_empty("home").map(Destination::from),
        }
    }
}

fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

fn load_catalogue(config: &Config) -> Catalogue {
    config
        .catalogue_file
        .as_ref()
        .map_or_else(Catalogue::builtin, |file| {
            Catalogue::from_file(infrastructure::expand_tilde(file)).unwrap_or_else(|e| {
                tracing::warn!(catalogue_file = %file, error = %e, "failed to load catalogue, using built-in");
                Catalogue::builtin()
            })
        })
}

/// Builds the application state from configuration.
///
/// Theme and catalogue failures are logged and fall back to the built-in
/// versions, so this never fails. The shortcut listener is not installed
/// yet; the plugin shim does that once it subscribes to key events.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing docportal plugin");

    let theme = load_theme(config);
    let catalogue = load_catalogue(config);
    tracing::debug!(entries = catalogue.len(), "catalogue loaded");

    let lifecycle = LifecycleController::new(config.shortcut, config.focus_delay);
    AppState::with_lifecycle(catalogue, theme, lifecycle, config.home.clone())
}
