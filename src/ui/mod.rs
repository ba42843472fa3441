//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing renderable UI state
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable UI component renderers
//! - [`layout`]: screen geometry and pointer hit-testing
//! - [`viewport`]: nearest-edge scroll window for palette rows
//! - [`helpers`]: shared rendering utilities (highlighting, clipping)
//! - [`theme`]: color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;
pub mod viewport;

pub use layout::{hit_test, HitTarget, Pointer};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Body, ContentView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, PageView, PaletteRow,
    PaletteView, SearchBarInfo, UIViewModel,
};
pub use viewport::Viewport;
