//! # Home Screen
//!
//! The shopping list editor: heading, add-item field, search field, and the
//! filtered list below them.
//!
//! ```text
//! ┌ heading ─────────────────┐  1 row
//! ╭ Add item ────────────────╮  3 rows
//! ╰──────────────────────────╯
//! ╭ Search ──────────────────╮  3 rows
//! ╰──────────────────────────╯
//! ┌ Items (2 of 5) ──────────┐  rest
//! │ • Milk                   │
//! │ • Almond milk            │
//! └──────────────────────────┘
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap};

use crate::core::presenter::HomeView;
use crate::tui::components::text_field::{FIELD_HEIGHT, TextField, TextFieldView};

/// Which Home field receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    ItemField,
    SearchField,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::ItemField => Focus::SearchField,
            Focus::SearchField => Focus::ItemField,
        }
    }
}

/// Areas of the Home screen within its content rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub heading: Rect,
    pub item_field: Rect,
    pub search_field: Rect,
    pub list: Rect,
}

impl HomeLayout {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min};
        let [heading, item_field, search_field, list] = Layout::vertical([
            Length(1),
            Length(FIELD_HEIGHT),
            Length(FIELD_HEIGHT),
            Min(0),
        ])
        .horizontal_margin(1)
        .areas(area);
        Self {
            heading,
            item_field,
            search_field,
            list,
        }
    }

    /// Field under (`column`, `row`), if any.
    pub fn field_at(&self, column: u16, row: u16) -> Option<Focus> {
        let contains = |r: Rect| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        };
        if contains(self.item_field) {
            Some(Focus::ItemField)
        } else if contains(self.search_field) {
            Some(Focus::SearchField)
        } else {
            None
        }
    }
}

pub struct HomeScreen<'a> {
    pub view: &'a HomeView<'a>,
    pub item_field: &'a TextField,
    pub search_field: &'a TextField,
    pub focus: Focus,
    pub list_offset: usize,
}

impl HomeScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let title = if self.view.items.len() == self.view.total_items {
            format!(" Items ({}) ", self.view.total_items)
        } else {
            format!(" Items ({} of {}) ", self.view.items.len(), self.view.total_items)
        };
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);

        if let Some(message) = &self.view.empty_message {
            Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .view
            .items
            .iter()
            .map(|label| {
                ListItem::new(Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Green)),
                    Span::raw(*label),
                ]))
            })
            .collect();

        let offset = self.list_offset.min(items.len().saturating_sub(1));
        let mut state = ListState::default().with_offset(offset);
        StatefulWidget::render(List::new(items).block(block), area, buf, &mut state);
    }
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = HomeLayout::new(area);

        Paragraph::new(self.view.heading)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .render(layout.heading, buf);

        TextFieldView {
            field: self.item_field,
            title: " Add item (Enter) ",
            placeholder: "e.g. Milk",
            focused: self.focus == Focus::ItemField,
        }
        .render(layout.item_field, buf);

        TextFieldView {
            field: self.search_field,
            title: " Search ",
            placeholder: "Type to filter",
            focused: self.focus == Focus::SearchField,
        }
        .render(layout.search_field, buf);

        self.render_list(layout.list, buf);
    }
}
