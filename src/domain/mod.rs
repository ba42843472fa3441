//! Domain layer for the docportal plugin.
//!
//! Core types independent of Zellij APIs and rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Catalogue entry and destination model
//!
//! # Examples
//!
//! ```
//! use docportal::domain::{IndexEntry, Result};
//!
//! fn home() -> Result<IndexEntry> {
//!     Ok(IndexEntry::new("Home", "/", "General"))
//! }
//! assert_eq!(home().unwrap().title, "Home");
//! ```

pub mod entry;
pub mod error;

pub use entry::{Destination, IndexEntry};
pub use error::{DocportalError, Result};
