//! Search pipeline for the command palette.
//!
//! ```text
//! query ──► rank (score, filter, stable sort) ──► group (by category) ──► GroupedResults
//! ```
//!
//! The pipeline is pure and runs from scratch on every query change. Nothing
//! is cached between queries.
//!
//! # Modules
//!
//! - [`scorer`]: priority-ladder relevance score for one entry
//! - [`ranker`]: filtering and ordering over the whole catalogue
//! - [`grouper`]: category grouping with flat-index addressing

pub mod grouper;
pub mod ranker;
pub mod scorer;

pub use grouper::{group, GroupedResults, ResultGroup};
pub use ranker::{rank, rank_scored, ScoredEntry};
pub use scorer::{classify, score, MatchTier};

use crate::catalogue::Catalogue;

/// Runs rank then group for `query`.
#[must_use]
pub fn search(query: &str, catalogue: &Catalogue) -> GroupedResults {
    let _span = tracing::debug_span!("search", query = %query).entered();

    let grouped = group(rank(query, catalogue));
    tracing::trace!(
        results = grouped.len(),
        groups = grouped.groups().len(),
        "search completed"
    );
    grouped
}
