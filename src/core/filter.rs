//! # Filter Engine
//!
//! Derives the visible subset of the list from the search query.
//!
//! `filter` is a pure function. `FilteredView` is the derived state the app
//! keeps: the matching indices, tagged with the list revision and query they
//! were computed from so a stale view can be detected and rebuilt.
//!
//! Matching is a case-insensitive substring test using Unicode lowercase
//! folding. A blank query (empty or whitespace-only) matches everything.
//! A non-blank query is matched as typed, surrounding spaces included.

use crate::core::list::ShoppingList;

/// True when `query` does not restrict the list.
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// True when `label` contains `query`, ignoring case. Blank queries match everything.
fn is_match(label: &str, query: &str) -> bool {
    if is_blank_query(query) {
        return true;
    }
    label.to_lowercase().contains(&query.to_lowercase())
}

/// Returns the order-preserving subsequence of `items` whose labels match `query`.
pub fn filter<'a, T: AsRef<str>>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| is_match(item.as_ref(), query))
        .collect()
}

/// A list entry paired with its position, so `filter` can report indices.
struct Indexed<'a> {
    index: usize,
    label: &'a str,
}

impl AsRef<str> for Indexed<'_> {
    fn as_ref(&self) -> &str {
        self.label
    }
}

/// Indices into a `ShoppingList` that currently pass the search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
    revision: u64,
    query: String,
}

impl FilteredView {
    /// Builds the view for `list` under `query`.
    pub fn compute(list: &ShoppingList, query: &str) -> Self {
        let entries: Vec<Indexed> = list
            .labels()
            .enumerate()
            .map(|(index, label)| Indexed { index, label })
            .collect();
        let indices = filter(&entries, query)
            .into_iter()
            .map(|entry| entry.index)
            .collect();
        Self {
            indices,
            revision: list.revision(),
            query: query.to_string(),
        }
    }

    /// Whether this view was built from the current list contents and query.
    pub fn is_current(&self, list: &ShoppingList, query: &str) -> bool {
        self.revision == list.revision() && self.query == query
    }

    /// Rebuilds the view if either dependency changed. Returns true if it did.
    pub fn refresh(&mut self, list: &ShoppingList, query: &str) -> bool {
        if self.is_current(list, query) {
            return false;
        }
        *self = Self::compute(list, query);
        true
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Labels of the visible items, in list order.
    pub fn labels<'a>(&'a self, list: &'a ShoppingList) -> impl Iterator<Item = &'a str> + 'a {
        self.indices
            .iter()
            .filter_map(move |&index| list.get(index))
            .map(|item| item.label())
    }
}
