//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;

/// Creates a fresh App on the Home screen with an empty list.
pub fn test_app() -> App {
    App::new()
}

/// Creates an App whose list already holds `labels`.
pub fn app_with_items(labels: &[&str]) -> App {
    let mut app = App::new();
    for label in labels {
        app.item_text = label.to_string();
        app.add_item_text();
    }
    app.item_text.clear();
    app
}
