//! The search catalogue: the fixed, ordered set of destinations the palette
//! can jump to.
//!
//! A [`Catalogue`] is validated once at construction and is immutable
//! afterwards. Declared order matters: it is the order shown when the palette
//! opens with an empty query, and the tie-breaker when two entries score the
//! same.
//!
//! # Sources
//!
//! - [`Catalogue::builtin`]: the compiled-in documentation index
//! - [`Catalogue::from_file`]: a TOML (`[[entries]]`) or JSON document
//!
//! # TOML Format
//!
//! ```toml
//! [[entries]]
//! title = "Home"
//! destination = "/"
//! description = "Portal landing page"
//! category = "General"
//! keywords = ["start", "index"]
//! ```

mod builtin;

use crate::domain::{Destination, DocportalError, IndexEntry, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Immutable, ordered list of indexable entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    entries: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogueDocument {
    entries: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalogue {
    List(Vec<IndexEntry>),
    Document(CatalogueDocument),
}

impl Catalogue {
    /// Builds a catalogue, enforcing entry invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DocportalError::Catalogue`] if any entry has an empty title,
    /// category or destination, or if two entries share a destination.
    ///
    /// # Example
    ///
    /// ```
    /// use docportal::catalogue::Catalogue;
    /// use docportal::domain::IndexEntry;
    ///
    /// let duplicate = vec![
    ///     IndexEntry::new("Home", "/", "General"),
    ///     IndexEntry::new("Start", "/", "General"),
    /// ];
    /// assert!(Catalogue::new(duplicate).is_err());
    /// ```
    pub fn new(entries: Vec<IndexEntry>) -> Result<Self> {
        let mut seen: HashSet<&Destination> = HashSet::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(DocportalError::Catalogue(format!(
                    "entry #{position} has an empty title"
                )));
            }
            if entry.category.trim().is_empty() {
                return Err(DocportalError::Catalogue(format!(
                    "entry '{}' has an empty category",
                    entry.title
                )));
            }
            if entry.destination.as_str().is_empty() {
                return Err(DocportalError::Catalogue(format!(
                    "entry '{}' has an empty destination",
                    entry.title
                )));
            }
            if !seen.insert(&entry.destination) {
                return Err(DocportalError::Catalogue(format!(
                    "destination '{}' is declared more than once",
                    entry.destination
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Returns the compiled-in documentation index.
    ///
    /// # Panics
    ///
    /// Panics if the built-in entries violate the catalogue invariants, which
    /// would be a programming error caught by the test suite.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin::entries()).expect("built-in catalogue should always be well-formed")
    }

    /// Loads a catalogue from a TOML or JSON file, chosen by extension.
    ///
    /// Files ending in `.json` are parsed as JSON (either a bare array of
    /// entries or an object with an `entries` array). Anything else is
    /// parsed as TOML with an `[[entries]]` table array.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// Parses a TOML catalogue document.
    ///
    /// # Errors
    ///
    /// Returns [`DocportalError::Parse`] on malformed TOML and
    /// [`DocportalError::Catalogue`] on invariant violations.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let document: CatalogueDocument = toml::from_str(contents)?;
        Self::new(document.entries)
    }

    /// Parses a JSON catalogue document.
    ///
    /// # Errors
    ///
    /// Returns [`DocportalError::Parse`] on malformed JSON and
    /// [`DocportalError::Catalogue`] on invariant violations.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let entries = match serde_json::from_str::<JsonCatalogue>(contents)? {
            JsonCatalogue::List(entries) => entries,
            JsonCatalogue::Document(document) => document.entries,
        };
        Self::new(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the entry for a destination.
    #[must_use]
    pub fn get(&self, destination: &Destination) -> Option<&IndexEntry> {
        self.entries.iter().find(|e| &e.destination == destination)
    }

    /// Returns the first declared entry, used as the default landing page.
    #[must_use]
    pub fn first(&self) -> Option<&IndexEntry> {
        self.entries.first()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalogue_is_valid_and_starts_at_home() {
        let catalogue = Catalogue::builtin();
        assert!(!catalogue.is_empty());
        assert_eq!(catalogue.first().map(|e| e.title.as_str()), Some("Home"));
    }

    #[test]
    fn rejects_empty_title() {
        let err = Catalogue::new(vec![IndexEntry::new("  ", "/x", "General")]).unwrap_err();
        assert!(matches!(err, DocportalError::Catalogue(_)));
    }

    #[test]
    fn rejects_empty_category() {
        let err = Catalogue::new(vec![IndexEntry::new("Home", "/", "")]).unwrap_err();
        assert!(err.to_string().contains("empty category"));
    }

    #[test]
    fn rejects_duplicate_destination() {
        let err = Catalogue::new(vec![
            IndexEntry::new("Home", "/", "General"),
            IndexEntry::new("Landing", "/", "General"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("declared more than once"));
    }

    #[test]
    fn lookup_by_destination() {
        let catalogue = Catalogue::new(vec![
            IndexEntry::new("Home", "/", "General"),
            IndexEntry::new("Glossary", "/glossary", "Reference"),
        ])
        .unwrap();
        let entry = catalogue.get(&Destination::new("/glossary")).unwrap();
        assert_eq!(entry.title, "Glossary");
        assert!(catalogue.get(&Destination::new("/missing")).is_none());
    }

    #[test]
    fn parses_toml_document() {
        let catalogue = Catalogue::from_toml_str(
            r#"
            [[entries]]
            title = "Home"
            destination = "/"
            category = "General"

            [[entries]]
            title = "Glossary"
            destination = "/glossary"
            description = "Terms"
            category = "Reference"
            keywords = ["terms"]
            "#,
        )
        .unwrap();

        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.entries()[1].keywords, vec!["terms".to_string()]);
        assert!(catalogue.entries()[0].description.is_empty());
    }

    #[test]
    fn parses_json_list_and_document() {
        let list = r#"[{"title":"Home","destination":"/","category":"General"}]"#;
        let document =
            r#"{"entries":[{"title":"Home","destination":"/","category":"General"}]}"#;

        assert_eq!(Catalogue::from_json_str(list).unwrap().len(), 1);
        assert_eq!(Catalogue::from_json_str(document).unwrap().len(), 1);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Catalogue::from_toml_str("[[entries]]\ntitle = ").unwrap_err();
        assert!(matches!(err, DocportalError::Parse(_)));
    }

    #[test]
    fn loads_from_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"title":"Runbooks","destination":"/runbooks","category":"Operations"}}]"#
        )
        .unwrap();

        let catalogue = Catalogue::from_file(file.path()).unwrap();
        assert_eq!(catalogue.entries()[0].title, "Runbooks");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalogue::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, DocportalError::Io(_)));
    }
}
