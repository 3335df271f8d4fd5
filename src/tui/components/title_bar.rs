//! # TitleBar Component
//!
//! Top app bar: a menu button that opens the drawer, the app title, and the
//! current status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"☰ Shopping List | 3 items"`
//! 2. **Default**: `"☰ Shopping List"`
//!
//! The menu glyph occupies the first `MENU_BUTTON_WIDTH` columns; clicks
//! there open the drawer (see `is_menu_hit`).

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const MENU_BUTTON_WIDTH: u16 = 3;
const MENU_GLYPH: &str = " ☰ ";

pub struct TitleBar<'a> {
    pub title: &'a str,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, status_message: &'a str) -> Self {
        Self {
            title,
            status_message,
        }
    }

    /// Whether a click at (`column`, `row`) lands on the menu button.
    pub fn is_menu_hit(area: Rect, column: u16, row: u16) -> bool {
        row == area.y && column >= area.x && column < area.x + MENU_BUTTON_WIDTH
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(MENU_GLYPH, Style::default().fg(Color::Yellow)),
            Span::styled(
                self.title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
