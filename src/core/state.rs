//! # Application State
//!
//! Core business state for Basket. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── list: ShoppingList         // the items, append-only
//! ├── item_text: String          // add-item field contents
//! ├── search_query: String       // search field contents
//! ├── filtered: FilteredView     // derived from list + search_query
//! ├── navigation: Navigation     // active screen + drawer
//! └── status_message: String     // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! `list`, `search_query` and `filtered` are private: the only writers are
//! `add_item_text` and `set_search_query`, and both rebuild `filtered`, so
//! readers never see a stale view.

use log::debug;

use crate::core::filter::FilteredView;
use crate::core::list::{AddOutcome, ShoppingList};
use crate::core::navigation::Navigation;

pub struct App {
    list: ShoppingList,
    pub item_text: String,
    search_query: String,
    filtered: FilteredView,
    pub navigation: Navigation,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let list = ShoppingList::new();
        let filtered = FilteredView::compute(&list, "");
        Self {
            list,
            item_text: String::new(),
            search_query: String::new(),
            filtered,
            navigation: Navigation::new(),
            status_message: String::from("Welcome to Basket!"),
        }
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filtered(&self) -> &FilteredView {
        &self.filtered
    }

    /// Appends the add-field text to the list. The field itself is left alone.
    pub fn add_item_text(&mut self) -> AddOutcome {
        let outcome = self.list.add_item(&self.item_text);
        self.refresh_filtered();
        outcome
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.refresh_filtered();
    }

    fn refresh_filtered(&mut self) {
        if self.filtered.refresh(&self.list, &self.search_query) {
            debug!("Filtered view rebuilt: {} of {} items", self.filtered.len(), self.list.len());
        }
    }

    /// Labels currently visible on the Home screen.
    pub fn visible_labels(&self) -> Vec<&str> {
        self.filtered.labels(&self.list).collect()
    }
}
