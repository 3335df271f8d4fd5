//! # Settings Screen
//!
//! Static placeholder page.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::core::presenter::SettingsView;

pub struct SettingsScreen<'a> {
    pub view: &'a SettingsView,
}

impl Widget for SettingsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        use Constraint::{Length, Min};
        let [heading_area, _, body_area] =
            Layout::vertical([Length(1), Length(1), Min(0)])
                .horizontal_margin(2)
                .areas(area);

        Paragraph::new(self.view.heading)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(heading_area, buf);
        Paragraph::new(self.view.body)
            .wrap(Wrap { trim: true })
            .render(body_area, buf);
    }
}
