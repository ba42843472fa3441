//! Filtering and ordering of catalogue entries for a query.

use super::scorer::score;
use crate::catalogue::Catalogue;
use crate::domain::IndexEntry;
use std::cmp::Reverse;

/// An entry paired with its relevance score for one query.
///
/// Produced fresh on every ranking and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a IndexEntry,
    pub score: u32,
}

/// Scores and orders the catalogue, keeping the scores.
///
/// A query that is blank after trimming matches everything: every entry is
/// returned in declared order with a score of `0`. Otherwise zero-score
/// entries are dropped and the rest are stable-sorted by descending score.
#[must_use]
pub fn rank_scored<'a>(query: &str, catalogue: &'a Catalogue) -> Vec<ScoredEntry<'a>> {
    let query = query.trim();

    if query.is_empty() {
        return catalogue
            .iter()
            .map(|entry| ScoredEntry { entry, score: 0 })
            .collect();
    }

    let mut scored: Vec<ScoredEntry<'a>> = catalogue
        .iter()
        .map(|entry| ScoredEntry {
            entry,
            score: score(query, entry),
        })
        .filter(|s| s.score > 0)
        .collect();

    // `sort_by_key` is stable, so equal scores keep catalogue order.
    scored.sort_by_key(|s| Reverse(s.score));
    scored
}

/// Ranks the catalogue for `query`, returning entries only.
///
/// # Examples
///
/// ```
/// use docportal::catalogue::Catalogue;
/// use docportal::domain::IndexEntry;
/// use docportal::search::rank;
///
/// let catalogue = Catalogue::new(vec![
///     IndexEntry::new("Home", "/", "General"),
///     IndexEntry::new("Glossary", "/glossary", "Reference"),
/// ])?;
/// let titles: Vec<_> = rank("gloss", &catalogue).iter().map(|e| e.title.as_str()).collect();
/// assert_eq!(titles, ["Glossary"]);
/// # Ok::<(), docportal::DocportalError>(())
/// ```
#[must_use]
pub fn rank<'a>(query: &str, catalogue: &'a Catalogue) -> Vec<&'a IndexEntry> {
    rank_scored(query, catalogue)
        .into_iter()
        .map(|s| s.entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn titles(entries: &[&IndexEntry]) -> Vec<String> {
        entries.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn empty_query_returns_catalogue_order() {
        let catalogue = catalogue();
        assert_eq!(
            titles(&rank("", &catalogue)),
            ["Home", "Backend Services Architecture", "Glossary"]
        );
        assert_eq!(rank("   ", &catalogue).len(), 3);
    }

    #[test]
    fn exact_title_query() {
        let catalogue = catalogue();
        assert_eq!(titles(&rank("home", &catalogue)), ["Home"]);
    }

    #[test]
    fn title_contains_query() {
        let catalogue = catalogue();
        let scored = rank_scored("arch", &catalogue);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].entry.title, "Backend Services Architecture");
        assert_eq!(scored[0].score, 80);
    }

    #[test]
    fn subsequence_query() {
        let catalogue = catalogue();
        let scored = rank_scored("bknd", &catalogue);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].score, 20);
    }

    #[test]
    fn query_is_trimmed_before_scoring() {
        let catalogue = catalogue();
        assert_eq!(titles(&rank("  home ", &catalogue)), ["Home"]);
    }

    #[test]
    fn sorts_descending_and_stably() {
        let catalogue = Catalogue::new(vec![
            IndexEntry::new("Deploy Notes", "/a", "Operations"),
            IndexEntry::new("Deploy", "/b", "Operations"),
            IndexEntry::new("Deployment Guide", "/c", "Operations"),
            IndexEntry::new("Rollbacks", "/d", "Operations").with_keywords(["deploy"]),
        ])
        .unwrap();

        let scored = rank_scored("deploy", &catalogue);
        let order: Vec<_> = scored.iter().map(|s| (s.entry.title.as_str(), s.score)).collect();
        assert_eq!(
            order,
            [
                ("Deploy", 100),
                ("Deploy Notes", 90),
                ("Deployment Guide", 90),
                ("Rollbacks", 75),
            ]
        );
    }

    #[test]
    fn every_ranked_entry_scores_above_zero() {
        let catalogue = Catalogue::builtin();
        for query in ["a", "ops", "arch", "xyz", "guide", "t"] {
            for entry in rank(query, &catalogue) {
                assert!(score(query, entry) > 0, "{query} vs {}", entry.title);
            }
        }
    }
}
