//! # Screen Presenter
//!
//! Turns `App` into a `RenderModel`: what is visible and the data bound to
//! it. No business logic beyond dispatching on the active screen; the
//! renderer draws the model and never reads `App` for content.
//!
//! ```text
//! RenderModel
//! ├── title            "Shopping List"
//! ├── tabs             Home, Profile (+ which one is selected)
//! ├── drawer           Some(..) only while open
//! └── content
//!     ├── Home         item field, search field, FilteredView labels
//!     ├── Profile      fixed detail table
//!     └── Settings     static text
//! ```

use crate::core::filter::is_blank_query;
use crate::core::navigation::{DrawerItem, Screen, Tab};
use crate::core::profile::{PROFILE_DETAILS, PROFILE_HEADING, ProfileDetail};
use crate::core::state::App;

pub const APP_TITLE: &str = "Shopping List";
pub const DRAWER_HEADING: &str = "Menu";
pub const SETTINGS_HEADING: &str = "Settings";
pub const SETTINGS_BODY: &str = "Add more settings options here.";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel<'a> {
    pub title: &'static str,
    pub screen: Screen,
    pub tabs: Vec<TabView>,
    pub drawer: Option<DrawerView>,
    pub content: ScreenContent<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabView {
    pub tab: Tab,
    pub label: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerView {
    pub heading: &'static str,
    pub entries: Vec<DrawerEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerEntry {
    pub item: DrawerItem,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenContent<'a> {
    Home(HomeView<'a>),
    Profile(ProfileView),
    Settings(SettingsView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView<'a> {
    pub heading: &'static str,
    pub item_text: &'a str,
    pub search_query: &'a str,
    /// FilteredView labels, in list order.
    pub items: Vec<&'a str>,
    pub total_items: usize,
    /// Shown instead of the list when `items` is empty.
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub heading: &'static str,
    pub details: &'static [ProfileDetail],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Builds the full render model for the current state.
pub fn present(app: &App) -> RenderModel<'_> {
    let nav = &app.navigation;
    let active_tab = nav.active_tab();

    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| TabView {
            tab,
            label: tab.label(),
            icon: tab.icon(),
            selected: active_tab == Some(tab),
        })
        .collect();

    let drawer = nav.is_drawer_open().then(|| DrawerView {
        heading: DRAWER_HEADING,
        entries: DrawerItem::ALL
            .into_iter()
            .map(|item| DrawerEntry {
                item,
                label: item.label(),
                selected: item.screen() == nav.screen(),
            })
            .collect(),
    });

    RenderModel {
        title: APP_TITLE,
        screen: nav.screen(),
        tabs,
        drawer,
        content: present_screen(app, nav.screen()),
    }
}

/// Content for `screen`, whether or not it is the active one. The renderer
/// uses this for the outgoing screen while a transition plays.
pub fn present_screen(app: &App, screen: Screen) -> ScreenContent<'_> {
    match screen {
        Screen::Home => ScreenContent::Home(present_home(app)),
        Screen::Profile => ScreenContent::Profile(ProfileView {
            heading: PROFILE_HEADING,
            details: &PROFILE_DETAILS,
        }),
        Screen::Settings => ScreenContent::Settings(SettingsView {
            heading: SETTINGS_HEADING,
            body: SETTINGS_BODY,
        }),
    }
}

fn present_home(app: &App) -> HomeView<'_> {
    let items = app.visible_labels();
    let empty_message = if !items.is_empty() {
        None
    } else if app.list().is_empty() {
        Some("Your list is empty. Add something above.".to_string())
    } else if is_blank_query(app.search_query()) {
        None
    } else {
        Some(format!("No items match \"{}\".", app.search_query()))
    };

    HomeView {
        heading: APP_TITLE,
        item_text: &app.item_text,
        search_query: app.search_query(),
        items,
        total_items: app.list().len(),
        empty_message,
    }
}
