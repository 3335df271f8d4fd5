//! # Drawer Component
//!
//! Modal side panel sliding over the left edge of the screen. Opened with
//! Ctrl+O or the menu button, closed with Esc, a click outside the panel, or
//! by picking an entry.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DrawerMenuState` lives in `TuiState` (keyboard highlight)
//! - `Drawer` is created each frame from the presenter's `DrawerView`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::navigation::{DrawerItem, Screen};
use crate::core::presenter::DrawerView;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

pub const DRAWER_WIDTH: u16 = 28;

/// Keyboard highlight inside the open drawer.
#[derive(Debug, Clone, Default)]
pub struct DrawerMenuState {
    pub highlighted: usize,
}

impl DrawerMenuState {
    /// Reset the highlight when the drawer opens: on the entry for the
    /// current screen if it has one, else on the first entry.
    pub fn on_open(&mut self, current: Screen) {
        self.highlighted = DrawerItem::ALL
            .iter()
            .position(|item| item.screen() == current)
            .unwrap_or(0);
    }

    /// Handle a key event, returning a DrawerEvent if the drawer should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DrawerEvent> {
        let count = DrawerItem::ALL.len();
        match event {
            TuiEvent::Escape => Some(DrawerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.highlighted = (self.highlighted + 1).min(count - 1);
                None
            }
            TuiEvent::Submit => DrawerItem::ALL
                .get(self.highlighted)
                .map(|item| DrawerEvent::Select(*item)),
            _ => None,
        }
    }
}

/// Events emitted by the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    Select(DrawerItem),
    Dismiss,
}

/// Where a click landed relative to the open drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerHit {
    Item(usize),
    Inside,
    Outside,
}

/// Transient render wrapper for the drawer overlay.
pub struct Drawer<'a> {
    view: &'a DrawerView,
    state: &'a DrawerMenuState,
}

impl<'a> Drawer<'a> {
    pub fn new(view: &'a DrawerView, state: &'a DrawerMenuState) -> Self {
        Self { view, state }
    }

    /// The panel's rectangle within the full frame.
    pub fn panel(area: Rect) -> Rect {
        Rect {
            width: area.width.min(DRAWER_WIDTH),
            ..area
        }
    }

    fn block(heading: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {heading} "),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(" Enter Open  Esc Close ").centered())
            .padding(Padding::horizontal(1))
    }

    pub fn hit_test(area: Rect, entry_count: usize, column: u16, row: u16) -> DrawerHit {
        let panel = Self::panel(area);
        let inside = column >= panel.x
            && column < panel.x + panel.width
            && row >= panel.y
            && row < panel.y + panel.height;
        if !inside {
            return DrawerHit::Outside;
        }
        let inner = Self::block("").inner(panel);
        if column >= inner.x && column < inner.x + inner.width && row >= inner.y {
            let index = (row - inner.y) as usize;
            if index < entry_count {
                return DrawerHit::Item(index);
            }
        }
        DrawerHit::Inside
    }
}

impl Component for Drawer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = Self::panel(area);
        frame.render_widget(Clear, panel);

        let items: Vec<ListItem> = self
            .view
            .entries
            .iter()
            .map(|entry| {
                let marker = if entry.selected { "● " } else { "  " };
                let style = if entry.selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(entry.label, style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Self::block(self.view.heading))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));

        let mut list_state = ListState::default().with_selected(Some(self.state.highlighted));
        frame.render_stateful_widget(list, panel, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::presenter::{DRAWER_HEADING, DrawerEntry};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn view(selected: bool) -> DrawerView {
        DrawerView {
            heading: DRAWER_HEADING,
            entries: vec![DrawerEntry {
                item: DrawerItem::Settings,
                label: "Settings",
                selected,
            }],
        }
    }

    #[test]
    fn test_keyboard_selection() {
        let mut state = DrawerMenuState::default();
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(DrawerEvent::Select(DrawerItem::Settings))
        );
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(DrawerEvent::Dismiss));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_on_open_highlights_current() {
        let mut state = DrawerMenuState { highlighted: 5 };
        state.on_open(Screen::Settings);
        assert_eq!(state.highlighted, 0);
        state.on_open(Screen::Home);
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_hit_test() {
        let area = Rect::new(0, 0, 80, 24);
        // Border at row 0, first entry on row 1, after border + padding columns
        assert_eq!(Drawer::hit_test(area, 1, 3, 1), DrawerHit::Item(0));
        assert_eq!(Drawer::hit_test(area, 1, 3, 5), DrawerHit::Inside);
        assert_eq!(Drawer::hit_test(area, 1, 0, 1), DrawerHit::Inside);
        assert_eq!(Drawer::hit_test(area, 1, 40, 1), DrawerHit::Outside);
    }

    #[test]
    fn test_renders_as_component_over_content() {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = view(false);
        let state = DrawerMenuState::default();
        terminal
            .draw(|f| {
                f.render_widget(Line::from("x".repeat(60)), f.area());
                let mut drawer = Drawer::new(&view, &state);
                let component: &mut dyn Component = &mut drawer;
                component.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        // The panel clears what was under it; the rest of the row is untouched
        assert_eq!(buffer.cell((DRAWER_WIDTH - 2, 0)).unwrap().symbol(), "─");
        assert_eq!(buffer.cell((DRAWER_WIDTH + 1, 0)).unwrap().symbol(), "x");
    }

    #[test]
    fn test_render_shows_heading_and_entry() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = view(true);
        let state = DrawerMenuState::default();
        terminal
            .draw(|f| Drawer::new(&view, &state).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Menu"));
        assert!(text.contains("Settings"));
        assert!(text.contains("●"));
    }
}
