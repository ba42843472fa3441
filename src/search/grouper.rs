//! Category grouping and flat-index addressing of ranked results.
//!
//! Groups appear in the order their category is first seen in the ranked
//! sequence, so the most relevant category leads. Items keep their ranked
//! order inside each group.
//!
//! # Flat Index
//!
//! Keyboard navigation addresses results by a single position across all
//! groups: the index into the concatenation of every group's items. The
//! rendered list additionally carries one heading row per group, so the
//! display row of an item is its flat index plus the number of headings at
//! or above it. [`GroupedResults::display_row`] and
//! [`GroupedResults::flat_index_at_row`] convert between the two.

use crate::domain::IndexEntry;

/// All results that share one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup {
    pub category: String,
    pub items: Vec<IndexEntry>,
}

/// Ranked results partitioned by category, with flat addressing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedResults {
    groups: Vec<ResultGroup>,
    len: usize,
}

impl GroupedResults {
    #[must_use]
    pub fn groups(&self) -> &[ResultGroup] {
        &self.groups
    }

    /// Number of addressable items across all groups.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the item at `flat`, if in range.
    #[must_use]
    pub fn get(&self, flat: usize) -> Option<&IndexEntry> {
        let mut remaining = flat;
        for group in &self.groups {
            if remaining < group.items.len() {
                return group.items.get(remaining);
            }
            remaining -= group.items.len();
        }
        None
    }

    /// Iterates all items in flat order.
    pub fn iter_flat(&self) -> impl Iterator<Item = &IndexEntry> + '_ {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Total number of rendered rows, headings included.
    #[must_use]
    pub fn display_len(&self) -> usize {
        self.len + self.groups.len()
    }

    /// Rendered row of the item at `flat`, counting one heading per group.
    #[must_use]
    pub fn display_row(&self, flat: usize) -> Option<usize> {
        let mut remaining = flat;
        let mut row = 0;
        for group in &self.groups {
            // heading
            row += 1;
            if remaining < group.items.len() {
                return Some(row + remaining);
            }
            remaining -= group.items.len();
            row += group.items.len();
        }
        None
    }

    /// Flat index of the item rendered at `row`, or `None` for headings and
    /// rows past the end.
    #[must_use]
    pub fn flat_index_at_row(&self, row: usize) -> Option<usize> {
        let mut group_start_row = 0;
        let mut flat_base = 0;
        for group in &self.groups {
            let first_item_row = group_start_row + 1;
            let end_row = first_item_row + group.items.len();
            if row < first_item_row {
                return None;
            }
            if row < end_row {
                return Some(flat_base + (row - first_item_row));
            }
            group_start_row = end_row;
            flat_base += group.items.len();
        }
        None
    }
}

/// Partitions ranked entries into category groups in first-seen order.
///
/// An insertion-ordered `Vec` holds the groups; a lookup is a linear scan,
/// which is fine for the handful of categories a catalogue has.
///
/// # Examples
///
/// ```
/// use docportal::domain::IndexEntry;
/// use docportal::search::group;
///
/// let ranked = [
///     IndexEntry::new("Glossary", "/glossary", "Reference"),
///     IndexEntry::new("Home", "/", "General"),
///     IndexEntry::new("FAQ", "/faq", "Reference"),
/// ];
/// let grouped = group(&ranked);
/// let categories: Vec<_> = grouped.groups().iter().map(|g| g.category.as_str()).collect();
/// assert_eq!(categories, ["Reference", "General"]);
/// assert_eq!(grouped.get(1).map(|e| e.title.as_str()), Some("FAQ"));
/// ```
#[must_use]
pub fn group<'a, I>(ranked: I) -> GroupedResults
where
    I: IntoIterator<Item = &'a IndexEntry>,
{
    let mut groups: Vec<ResultGroup> = Vec::new();
    let mut len = 0;

    for entry in ranked {
        match groups.iter_mut().find(|g| g.category == entry.category) {
            Some(existing) => existing.items.push(entry.clone()),
            None => groups.push(ResultGroup {
                category: entry.category.clone(),
                items: vec![entry.clone()],
            }),
        }
        len += 1;
    }

    GroupedResults { groups, len }
}
