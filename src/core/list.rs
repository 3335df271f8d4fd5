//! # List Store
//!
//! The shopping list itself: an ordered, append-only sequence of labels.
//!
//! ```text
//! ShoppingList
//! ├── items: Vec<ShoppingItem>   // insertion order, newest last
//! └── revision: u64              // bumped on every successful add
//! ```
//!
//! Items have no id. Their identity is their index in the list.

use std::fmt;

/// A single entry on the list. The label is always trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    label: String,
}

impl ShoppingItem {
    /// Builds an item from raw input. Returns `None` when the trimmed text is empty.
    pub fn new(text: &str) -> Option<Self> {
        let label = text.trim();
        if label.is_empty() {
            return None;
        }
        Some(Self {
            label: label.to_string(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl AsRef<str> for ShoppingItem {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Result of an add request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new item was appended at this index.
    Added(usize),
    /// The text was empty or whitespace-only; the list is unchanged.
    IgnoredBlank,
}

#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    revision: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` (trimmed) unless it is blank.
    pub fn add_item(&mut self, text: &str) -> AddOutcome {
        match ShoppingItem::new(text) {
            Some(item) => {
                self.items.push(item);
                self.revision += 1;
                AddOutcome::Added(self.items.len() - 1)
            }
            None => AddOutcome::IgnoredBlank,
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ShoppingItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Changes every time the contents change. Used to detect a stale filtered view.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(ShoppingItem::label)
    }
}
