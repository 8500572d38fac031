//! Pagination utilities for skip/limit endpoints.

use serde::Serialize;

/// A page of results from the Wordnik API.
///
/// The API reports no totals, so a full page is taken to mean more may
/// follow.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Number of items skipped before this page.
    pub skip: u32,
    /// Requested page size.
    pub limit: u32,
    /// Whether there may be more pages.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Create a new page from items and the skip/limit used to fetch them.
    #[must_use]
    pub fn new(items: Vec<T>, skip: u32, limit: u32) -> Self {
        let has_more = limit > 0 && items.len() >= limit as usize;
        Self {
            items,
            skip,
            limit,
            has_more,
        }
    }

    /// The `skip` value for the following page.
    #[must_use]
    pub fn next_skip(&self) -> u32 {
        self.skip.saturating_add(self.limit)
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            skip: self.skip,
            limit: self.limit,
            has_more: self.has_more,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
