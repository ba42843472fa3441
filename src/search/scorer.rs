//! Relevance scoring for a single catalogue entry.
//!
//! Scoring is a strict priority ladder: the first rule that matches decides
//! the score. Every comparison is made on lowercase text, so `"HOME"` and
//! `"home"` score identically against a title of `"Home"`.

use crate::domain::IndexEntry;

/// The rule of the priority ladder that matched an entry.
///
/// Variants are listed strongest first. Category text is ranked between
/// exact and prefix keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    TitleExact,
    TitlePrefix,
    TitleContains,
    KeywordExact,
    CategoryContains,
    KeywordPrefix,
    KeywordContains,
    DescriptionContains,
    TitleSubsequence,
}

impl MatchTier {
    /// Numeric score for this tier. Higher is stronger.
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::TitleExact => 100,
            Self::TitlePrefix => 90,
            Self::TitleContains => 80,
            Self::KeywordExact => 75,
            Self::CategoryContains => 70,
            Self::KeywordPrefix => 65,
            Self::KeywordContains => 55,
            Self::DescriptionContains => 40,
            Self::TitleSubsequence => 20,
        }
    }
}

/// Finds the strongest rule matching `query` against `entry`.
///
/// Returns `None` when nothing matches. The query is lowercased here; callers
/// decide whether to trim it.
#[must_use]
pub fn classify(query: &str, entry: &IndexEntry) -> Option<MatchTier> {
    let query = query.to_lowercase();
    let title = entry.title.to_lowercase();

    if title == query {
        return Some(MatchTier::TitleExact);
    }
    if title.starts_with(&query) {
        return Some(MatchTier::TitlePrefix);
    }
    if title.contains(&query) {
        return Some(MatchTier::TitleContains);
    }

    let keywords: Vec<String> = entry.keywords.iter().map(|k| k.to_lowercase()).collect();

    if keywords.iter().any(|k| *k == query) {
        return Some(MatchTier::KeywordExact);
    }
    if entry.category.to_lowercase().contains(&query) {
        return Some(MatchTier::CategoryContains);
    }
    if keywords.iter().any(|k| k.starts_with(&query)) {
        return Some(MatchTier::KeywordPrefix);
    }
    if keywords.iter().any(|k| k.contains(&query)) {
        return Some(MatchTier::KeywordContains);
    }
    if entry.description.to_lowercase().contains(&query) {
        return Some(MatchTier::DescriptionContains);
    }
    if is_subsequence(&query, &title) {
        return Some(MatchTier::TitleSubsequence);
    }

    None
}

/// Scores `query` against `entry`; `0` means no match.
///
/// # Examples
///
/// ```
/// use docportal::domain::IndexEntry;
/// use docportal::search::score;
///
/// let entry = IndexEntry::new("Backend Services Architecture", "/backend-services", "Architecture");
/// assert_eq!(score("arch", &entry), 80);
/// assert_eq!(score("bknd", &entry), 20);
/// assert_eq!(score("zzz", &entry), 0);
/// ```
#[must_use]
pub fn score(query: &str, entry: &IndexEntry) -> u32 {
    classify(query, entry).map_or(0, MatchTier::score)
}

/// Whether every char of `needle` appears in `haystack` in order.
///
/// Single forward pass: the haystack iterator is the cursor, and each needle
/// char consumes it up to and including the match.
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut cursor = haystack.chars();
    needle.chars().all(|c| cursor.any(|h| h == c))
}
