//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Key / Mouse / Timer → Event → handle_event → state mutation → Actions → host
//!                                   ↑                                │
//!                                   └──── FocusElapsed (timer) ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects emitted by the event handler
//! - [`handler`]: event processing and state transitions
//! - [`lifecycle`]: shortcut ownership and raw key translation
//! - [`modes`]: palette and sidebar mode enums
//! - [`palette`]: palette navigation state machine
//! - [`portal`]: current page and back-history
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod handler;
pub mod lifecycle;
pub mod modes;
pub mod palette;
pub mod portal;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use lifecycle::{Key, KeyPress, LifecycleController, Modifier, Shortcut};
pub use modes::{PaletteMode, SidebarMode};
pub use palette::{FocusToken, Palette};
pub use portal::PortalState;
pub use state::AppState;
