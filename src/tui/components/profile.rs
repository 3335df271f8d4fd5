//! # Profile Screen
//!
//! Heading plus a bordered card of label/value rows, with a faint rule
//! between rows.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::presenter::ProfileView;

pub struct ProfileScreen<'a> {
    pub view: &'a ProfileView,
}

impl ProfileScreen<'_> {
    fn card_lines(&self, width: u16) -> Vec<Line<'static>> {
        let rule = "─".repeat(width as usize);
        let mut lines = Vec::with_capacity(self.view.details.len() * 3);
        for (index, detail) in self.view.details.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                detail.label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(detail.value));
            if index + 1 != self.view.details.len() {
                lines.push(Line::from(Span::styled(
                    rule.clone(),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                )));
            }
        }
        lines
    }
}

impl Widget for ProfileScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        use Constraint::{Length, Min};
        let [heading_area, _, card_area] =
            Layout::vertical([Length(1), Length(1), Min(0)])
                .horizontal_margin(2)
                .areas(area);

        Paragraph::new(self.view.heading)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .render(heading_area, buf);

        let card = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        let inner_width = card.inner(card_area).width;
        Paragraph::new(self.card_lines(inner_width))
            .block(card)
            .render(card_area, buf);
    }
}
