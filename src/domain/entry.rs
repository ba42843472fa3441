//! Catalogue entry model.
//!
//! An [`IndexEntry`] describes one place the portal can jump to: a page or a
//! topic within a page. Entries are defined once, when the catalogue is
//! loaded, and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque route identifier handed to the host's navigation capability.
///
/// The palette never interprets a destination; it only compares them for
/// uniqueness and passes them back out on activation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destination(String);

impl Destination {
    /// Wraps a route string.
    #[must_use]
    pub fn new(route: impl Into<String>) -> Self {
        Self(route.into())
    }

    /// Returns the underlying route string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Destination {
    fn from(route: &str) -> Self {
        Self::new(route)
    }
}

impl From<String> for Destination {
    fn from(route: String) -> Self {
        Self(route)
    }
}

/// A searchable catalogue entry.
///
/// # Fields
///
/// - `title`: display name, non-empty
/// - `destination`: what the host navigates to, unique across the catalogue
/// - `description`: secondary text shown under the title
/// - `category`: grouping label used for display only, non-empty
/// - `keywords`: extra match terms beyond title, description and category
///
/// # Examples
///
/// ```
/// use docportal::domain::IndexEntry;
///
/// let entry = IndexEntry::new("Glossary", "/glossary", "Reference")
///     .with_description("Terms used across the platform")
///     .with_keywords(["terms", "definitions"]);
/// assert_eq!(entry.destination.as_str(), "/glossary");
/// assert_eq!(entry.keywords.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub title: String,
    pub destination: Destination,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl IndexEntry {
    /// Creates an entry with no description and no keywords.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        destination: impl Into<Destination>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            destination: destination.into(),
            description: String::new(),
            category: category.into(),
            keywords: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}
