//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! `dispatch` decides where each event goes, in priority order:
//!
//! 1. Quit always quits.
//! 2. An open drawer is modal: it takes every key and click.
//! 3. Global shortcuts and clicks on the chrome (tabs, menu button).
//! 4. On Home, the focused text field.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (screen transition in flight): draws every ~16ms.
//! - **Idle**: sleeps up to 250ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod transition;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{AnimationSettings, ResolvedConfig};
use crate::core::navigation::{DrawerItem, Screen, Tab};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    Drawer, DrawerEvent, DrawerHit, DrawerMenuState, FieldEvent, Focus, HomeLayout, TabBar,
    TextField, TitleBar,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::transition::TransitionAnimation;
use crate::tui::ui::AppLayout;

const ANIMATING_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub item_field: TextField,
    pub search_field: TextField,
    pub focus: Focus,
    pub list_offset: usize,
    pub drawer: DrawerMenuState,
    // Animation state
    pub transition: Option<TransitionAnimation>,
    pub animation: AnimationSettings,
    pub show_icons: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            item_field: TextField::new(),
            search_field: TextField::new(),
            focus: Focus::default(),
            list_offset: 0,
            drawer: DrawerMenuState::default(),
            transition: None,
            animation: AnimationSettings::default(),
            show_icons: true,
        }
    }
}

impl TuiState {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            animation: config.animation,
            show_icons: config.show_icons,
            ..Self::default()
        }
    }

    /// Pull field contents back from the core after it changed them.
    pub fn sync(&mut self, app: &App) {
        self.item_field.sync(&app.item_text);
        self.search_field.sync(app.search_query());
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            Focus::ItemField => &mut self.item_field,
            Focus::SearchField => &mut self.search_field,
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|anim| !anim.is_finished(now))
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Route one event through the TUI and into the core.
///
/// `frame_area` is the full terminal area, used for mouse hit testing.
pub fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    frame_area: Rect,
    now: Instant,
) -> Effect {
    let effect = route(app, tui, event, frame_area);
    if let Effect::Transition(transition) = effect {
        tui.transition = TransitionAnimation::start(transition, &tui.animation, now);
    }
    tui.sync(app);
    effect
}

fn route(app: &mut App, tui: &mut TuiState, event: &TuiEvent, frame_area: Rect) -> Effect {
    match event {
        TuiEvent::Quit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    if app.navigation.is_drawer_open() {
        return route_drawer(app, tui, event, frame_area);
    }

    let layout = AppLayout::new(frame_area);
    match event {
        TuiEvent::OpenDrawer => open_drawer(app, tui),
        TuiEvent::SelectTab(index) => match Tab::from_index(*index) {
            Some(tab) => update(app, Action::SelectTab(tab)),
            None => Effect::None,
        },
        TuiEvent::MouseClick(column, row) => {
            if let Some(tab) = TabBar::hit_test(layout.tabs, Tab::ALL.len(), *column, *row)
                .and_then(Tab::from_index)
            {
                return update(app, Action::SelectTab(tab));
            }
            if TitleBar::is_menu_hit(layout.title, *column, *row) {
                return open_drawer(app, tui);
            }
            if app.navigation.screen() == Screen::Home
                && let Some(focus) = HomeLayout::new(layout.content).field_at(*column, *row)
            {
                tui.focus = focus;
            }
            Effect::None
        }
        _ if app.navigation.screen() == Screen::Home => route_home(app, tui, event),
        _ => Effect::None,
    }
}

fn open_drawer(app: &mut App, tui: &mut TuiState) -> Effect {
    let effect = update(app, Action::OpenDrawer);
    tui.drawer.on_open(app.navigation.screen());
    effect
}

fn route_drawer(app: &mut App, tui: &mut TuiState, event: &TuiEvent, frame_area: Rect) -> Effect {
    let drawer_event = match event {
        TuiEvent::MouseClick(column, row) => {
            match Drawer::hit_test(frame_area, DrawerItem::ALL.len(), *column, *row) {
                DrawerHit::Item(index) => DrawerItem::ALL
                    .get(index)
                    .map(|item| DrawerEvent::Select(*item)),
                DrawerHit::Outside => Some(DrawerEvent::Dismiss),
                DrawerHit::Inside => None,
            }
        }
        _ => tui.drawer.handle_event(event),
    };
    match drawer_event {
        Some(DrawerEvent::Select(item)) => update(app, Action::SelectDrawerItem(item)),
        Some(DrawerEvent::Dismiss) => update(app, Action::CloseDrawer),
        None => Effect::None,
    }
}

fn route_home(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            Effect::None
        }
        TuiEvent::CursorUp => {
            tui.list_offset = tui.list_offset.saturating_sub(1);
            Effect::None
        }
        TuiEvent::CursorDown => {
            let last = app.filtered().len().saturating_sub(1);
            tui.list_offset = (tui.list_offset + 1).min(last);
            Effect::None
        }
        _ => {
            let focus = tui.focus;
            let field = tui.focused_field();
            let Some(field_event) = field.handle_event(event) else {
                return Effect::None;
            };
            let text = field.text().to_string();
            match (field_event, focus) {
                (FieldEvent::Edited, Focus::ItemField) => {
                    update(app, Action::ItemTextChanged(text))
                }
                (FieldEvent::Edited, Focus::SearchField) => {
                    tui.list_offset = 0;
                    update(app, Action::SearchChanged(text))
                }
                (FieldEvent::Submit, Focus::ItemField) => update(app, Action::AddItem),
                _ => Effect::None,
            }
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::from_config(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let animating = tui.is_animating(now);
        if animating {
            needs_redraw = true;
        } else if tui.transition.take().is_some() {
            // Draw the settled screen once more
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &tui, now))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATING_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut app, &mut tui, &event, frame_area, Instant::now()) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            debug!("Quit requested");
            break;
        }
    }

    info!("Exiting with {} items on the list", app.list().len());
    ratatui::restore();
    Ok(())
}
