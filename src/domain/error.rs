//! Error types for the docportal plugin.
//!
//! This module defines the centralized error type [`DocportalError`] and a type
//! alias [`Result`] used throughout the crate. All variants derive their
//! `Error` implementation through `thiserror`.

use thiserror::Error;

/// The main error type for docportal operations.
///
/// Most failures are construction-time problems (a malformed catalogue, an
/// unreadable theme, a bad configuration value). Event handling itself has no
/// fallible I/O, so the palette core rarely produces these at runtime.
///
/// # Examples
///
/// ```
/// use docportal::DocportalError;
///
/// fn validate() -> Result<(), DocportalError> {
///     Err(DocportalError::Catalogue("entry #2 has an empty title".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DocportalError {
    /// The search catalogue violates one of its invariants.
    ///
    /// Raised for empty titles or categories and for duplicate destinations.
    #[error("Catalogue error: {0}")]
    Catalogue(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is invalid.
    ///
    /// The string names the offending key and value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalogue or theme document could not be deserialized.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for DocportalError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for DocportalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// A specialized `Result` type for docportal operations.
pub type Result<T> = std::result::Result<T, DocportalError>;
