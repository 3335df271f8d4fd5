//! # Navigation State
//!
//! Which screen is showing and whether the side drawer is open. The two are
//! independent: every combination is valid.
//!
//! ```text
//!                 SelectTab(Home)         SelectTab(Profile)
//!        ┌──────────────────────────┐ ┌────────────────────────┐
//!        ▼                          │ │                        ▼
//!    ┌──────┐                     ┌─┴─┴───┐               ┌─────────┐
//!    │ Home │◄─── SelectTab ──────┤  any  ├── SelectTab ─►│ Profile │
//!    └──────┘                     └───┬───┘               └─────────┘
//!                                     │ SelectDrawerItem(Settings)
//!                                     ▼          (also closes drawer)
//!                                ┌──────────┐
//!                                │ Settings │
//!                                └──────────┘
//!
//!    Drawer:  Closed ──open──► Open ──close──► Closed
//! ```
//!
//! Settings is only reachable from the drawer and Profile only from the tab
//! bar. Screen changes are reported as a [`Transition`] whose direction the
//! renderer uses to pick an animation.

use std::cmp::Ordering;

/// Top-level views, in fixed order. The order drives transition direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Screen {
    #[default]
    Home,
    Profile,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Profile, Screen::Settings];

    /// Fixed position within the enumeration.
    pub fn ordinal(self) -> usize {
        match self {
            Screen::Home => 0,
            Screen::Profile => 1,
            Screen::Settings => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Profile => "Profile",
            Screen::Settings => "Settings",
        }
    }
}

/// Entries of the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Profile => "👤",
        }
    }

    pub fn screen(self) -> Screen {
        match self {
            Tab::Home => Screen::Home,
            Tab::Profile => Screen::Profile,
        }
    }

    /// Tab for position `index` in the bar, if any.
    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }
}

/// Entries of the side drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerItem {
    Settings,
}

impl DrawerItem {
    pub const ALL: [DrawerItem; 1] = [DrawerItem::Settings];

    pub fn label(self) -> &'static str {
        match self {
            DrawerItem::Settings => "Settings",
        }
    }

    pub fn screen(self) -> Screen {
        match self {
            DrawerItem::Settings => Screen::Settings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    /// New screen sits later in the enumeration: slide in from the right.
    Forward,
    /// New screen sits earlier: slide in from the left.
    Backward,
    /// Same position: fade only.
    CrossFade,
}

impl TransitionDirection {
    /// Horizontal sign of the incoming screen's motion (`1`, `-1` or `0`).
    pub fn sign(self) -> i8 {
        match self {
            TransitionDirection::Forward => 1,
            TransitionDirection::Backward => -1,
            TransitionDirection::CrossFade => 0,
        }
    }
}

/// A screen change, from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

impl Transition {
    pub fn new(from: Screen, to: Screen) -> Self {
        Self { from, to }
    }

    pub fn direction(&self) -> TransitionDirection {
        match self.to.ordinal().cmp(&self.from.ordinal()) {
            Ordering::Greater => TransitionDirection::Forward,
            Ordering::Less => TransitionDirection::Backward,
            Ordering::Equal => TransitionDirection::CrossFade,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    screen: Screen,
    drawer: DrawerState,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer == DrawerState::Open
    }

    /// The tab highlighted in the bottom bar. `None` while on Settings.
    pub fn active_tab(&self) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.screen() == self.screen)
    }

    pub fn select_tab(&mut self, tab: Tab) -> Option<Transition> {
        self.go_to(tab.screen())
    }

    /// Switches to the item's screen and closes the drawer, whatever its state was.
    pub fn select_drawer_item(&mut self, item: DrawerItem) -> Option<Transition> {
        self.drawer = DrawerState::Closed;
        self.go_to(item.screen())
    }

    pub fn open_drawer(&mut self) {
        self.drawer = DrawerState::Open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer = DrawerState::Closed;
    }

    fn go_to(&mut self, target: Screen) -> Option<Transition> {
        if target == self.screen {
            return None;
        }
        let transition = Transition::new(self.screen, target);
        self.screen = target;
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = Navigation::new();
        assert_eq!(nav.screen(), Screen::Home);
        assert_eq!(nav.drawer(), DrawerState::Closed);
        assert_eq!(nav.active_tab(), Some(Tab::Home));
    }

    #[test]
    fn test_select_profile_is_forward() {
        let mut nav = Navigation::new();
        let transition = nav.select_tab(Tab::Profile).unwrap();
        assert_eq!(nav.screen(), Screen::Profile);
        assert_eq!(transition, Transition::new(Screen::Home, Screen::Profile));
        assert_eq!(transition.direction(), TransitionDirection::Forward);
    }

    #[test]
    fn test_back_to_home_is_backward() {
        let mut nav = Navigation::new();
        nav.select_drawer_item(DrawerItem::Settings);
        let transition = nav.select_tab(Tab::Home).unwrap();
        assert_eq!(transition.direction(), TransitionDirection::Backward);
        assert_eq!(transition.from, Screen::Settings);
    }

    #[test]
    fn test_same_screen_has_no_transition() {
        let mut nav = Navigation::new();
        assert_eq!(nav.select_tab(Tab::Home), None);
        assert_eq!(nav.screen(), Screen::Home);
    }

    #[test]
    fn test_equal_ordinals_cross_fade() {
        let transition = Transition::new(Screen::Profile, Screen::Profile);
        assert_eq!(transition.direction(), TransitionDirection::CrossFade);
        assert_eq!(transition.direction().sign(), 0);
    }

    #[test]
    fn test_drawer_item_closes_drawer_from_any_state() {
        for open_first in [true, false] {
            let mut nav = Navigation::new();
            if open_first {
                nav.open_drawer();
            }
            nav.select_drawer_item(DrawerItem::Settings);
            assert_eq!(nav.screen(), Screen::Settings);
            assert_eq!(nav.drawer(), DrawerState::Closed);
        }
    }

    #[test]
    fn test_drawer_item_on_current_screen_still_closes() {
        let mut nav = Navigation::new();
        nav.select_drawer_item(DrawerItem::Settings);
        nav.open_drawer();
        assert_eq!(nav.select_drawer_item(DrawerItem::Settings), None);
        assert!(!nav.is_drawer_open());
    }

    #[test]
    fn test_drawer_independent_of_screen() {
        let mut nav = Navigation::new();
        nav.open_drawer();
        nav.select_tab(Tab::Profile);
        assert_eq!(nav.screen(), Screen::Profile);
        assert!(nav.is_drawer_open());
        nav.close_drawer();
        assert!(!nav.is_drawer_open());
        assert_eq!(nav.screen(), Screen::Profile);
    }

    #[test]
    fn test_no_tab_active_on_settings() {
        let mut nav = Navigation::new();
        nav.select_drawer_item(DrawerItem::Settings);
        assert_eq!(nav.active_tab(), None);
    }

    #[test]
    fn test_settings_not_in_tab_bar() {
        assert!(Tab::ALL.iter().all(|tab| tab.screen() != Screen::Settings));
        assert!(DrawerItem::ALL.iter().all(|item| item.screen() != Screen::Profile));
    }

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (index, screen) in Screen::ALL.iter().enumerate() {
            assert_eq!(screen.ordinal(), index);
        }
        assert!(Screen::Home < Screen::Profile && Screen::Profile < Screen::Settings);
    }

    #[test]
    fn test_tab_from_index() {
        assert_eq!(Tab::from_index(0), Some(Tab::Home));
        assert_eq!(Tab::from_index(1), Some(Tab::Profile));
        assert_eq!(Tab::from_index(2), None);
    }
}
