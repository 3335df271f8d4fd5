//! # Actions
//!
//! Everything that can happen in Basket becomes an `Action`.
//! User types in the search field? That's `Action::SearchChanged(text)`.
//! User picks a tab? That's `Action::SelectTab(tab)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state in place. No I/O here. The returned `Effect` tells
//! the adapter what to do next (quit, play a screen transition).
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on `App`.

use log::{debug, info};

use crate::core::list::AddOutcome;
use crate::core::navigation::{DrawerItem, Tab, Transition};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add-item field now holds this text.
    ItemTextChanged(String),
    /// Add the add-item field's text to the list.
    AddItem,
    /// Search field now holds this text.
    SearchChanged(String),
    OpenDrawer,
    CloseDrawer,
    SelectTab(Tab),
    SelectDrawerItem(DrawerItem),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// The active screen changed; the renderer may animate it.
    Transition(Transition),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::ItemTextChanged(text) => {
            app.item_text = text;
            Effect::None
        }
        Action::AddItem => {
            match app.add_item_text() {
                AddOutcome::Added(index) => {
                    app.item_text.clear();
                    let count = app.list().len();
                    app.status_message = item_count(count);
                    debug!("Added item #{} ({} total)", index, count);
                }
                AddOutcome::IgnoredBlank => {
                    debug!("Ignored blank item text");
                }
            }
            Effect::None
        }
        Action::SearchChanged(query) => {
            app.set_search_query(query);
            Effect::None
        }
        Action::OpenDrawer => {
            app.navigation.open_drawer();
            Effect::None
        }
        Action::CloseDrawer => {
            app.navigation.close_drawer();
            Effect::None
        }
        Action::SelectTab(tab) => transition_effect(app.navigation.select_tab(tab)),
        Action::SelectDrawerItem(item) => {
            transition_effect(app.navigation.select_drawer_item(item))
        }
        Action::Quit => Effect::Quit,
    }
}

fn item_count(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    }
}

fn transition_effect(transition: Option<Transition>) -> Effect {
    match transition {
        Some(transition) => {
            info!(
                "Screen {:?} -> {:?} ({:?})",
                transition.from,
                transition.to,
                transition.direction()
            );
            Effect::Transition(transition)
        }
        None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::{DrawerState, Screen, TransitionDirection};
    use crate::test_support::{app_with_items, test_app};

    fn add(app: &mut App, text: &str) -> Effect {
        update(app, Action::ItemTextChanged(text.to_string()));
        update(app, Action::AddItem)
    }

    #[test]
    fn test_add_item_clears_field() {
        let mut app = test_app();
        assert_eq!(add(&mut app, "  Bread "), Effect::None);
        assert_eq!(app.visible_labels(), vec!["Bread"]);
        assert!(app.item_text.is_empty());
        assert_eq!(app.status_message, "1 item");
        add(&mut app, "Milk");
        assert_eq!(app.status_message, "2 items");
    }

    #[test]
    fn test_blank_add_keeps_field() {
        let mut app = test_app();
        add(&mut app, "   ");
        assert!(app.list().is_empty());
        assert_eq!(app.item_text, "   ");
    }

    #[test]
    fn test_grocery_scenario() {
        let mut app = test_app();
        add(&mut app, "Bread");
        add(&mut app, "  ");
        add(&mut app, "Milk");
        assert_eq!(app.list().labels().collect::<Vec<_>>(), vec!["Bread", "Milk"]);

        update(&mut app, Action::SearchChanged("mi".to_string()));
        assert_eq!(app.visible_labels(), vec!["Milk"]);

        update(&mut app, Action::SearchChanged(String::new()));
        assert_eq!(app.visible_labels(), vec!["Bread", "Milk"]);
    }

    #[test]
    fn test_add_while_searching_updates_view() {
        let mut app = app_with_items(&["Bread"]);
        update(&mut app, Action::SearchChanged("MILK".to_string()));
        assert!(app.visible_labels().is_empty());
        add(&mut app, "Oat milk");
        assert_eq!(app.visible_labels(), vec!["Oat milk"]);
        add(&mut app, "Butter");
        assert_eq!(app.visible_labels(), vec!["Oat milk"]);
    }

    #[test]
    fn test_select_profile_transition() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectTab(Tab::Profile));
        let Effect::Transition(transition) = effect else {
            panic!("Expected a transition, got {effect:?}");
        };
        assert_eq!(app.navigation.screen(), Screen::Profile);
        assert_eq!(transition.direction(), TransitionDirection::Forward);
    }

    #[test]
    fn test_select_current_tab_is_no_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SelectTab(Tab::Home)), Effect::None);
    }

    #[test]
    fn test_drawer_item_select_closes_drawer() {
        let mut app = test_app();
        update(&mut app, Action::OpenDrawer);
        assert_eq!(app.navigation.drawer(), DrawerState::Open);
        let effect = update(&mut app, Action::SelectDrawerItem(DrawerItem::Settings));
        assert!(matches!(effect, Effect::Transition(_)));
        assert_eq!(app.navigation.screen(), Screen::Settings);
        assert_eq!(app.navigation.drawer(), DrawerState::Closed);
    }

    #[test]
    fn test_open_close_drawer() {
        let mut app = test_app();
        update(&mut app, Action::OpenDrawer);
        update(&mut app, Action::CloseDrawer);
        assert_eq!(app.navigation.drawer(), DrawerState::Closed);
        assert_eq!(app.navigation.screen(), Screen::Home);
    }

    #[test]
    fn test_state_survives_screen_changes() {
        let mut app = app_with_items(&["Tea", "Coffee"]);
        update(&mut app, Action::SearchChanged("co".to_string()));
        update(&mut app, Action::ItemTextChanged("Sug".to_string()));
        update(&mut app, Action::SelectTab(Tab::Profile));
        update(&mut app, Action::SelectTab(Tab::Home));
        assert_eq!(app.search_query(), "co");
        assert_eq!(app.item_text, "Sug");
        assert_eq!(app.visible_labels(), vec!["Coffee"]);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
