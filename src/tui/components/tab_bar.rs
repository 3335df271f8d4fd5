//! # TabBar Component
//!
//! Bottom navigation bar. Each tab gets an equal share of the width, with its
//! icon and label centred; the tab bound to the active screen is highlighted.
//! On screens without a tab (Settings) nothing is highlighted.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::presenter::TabView;
use crate::tui::component::Component;

pub const TAB_BAR_HEIGHT: u16 = 2;

pub struct TabBar<'a> {
    pub tabs: &'a [TabView],
    pub show_icons: bool,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a [TabView], show_icons: bool) -> Self {
        Self { tabs, show_icons }
    }

    /// One cell per tab, left to right.
    pub fn cells(area: Rect, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let constraints = (0..count).map(|_| Constraint::Ratio(1, count as u32));
        Layout::horizontal(constraints).split(area).to_vec()
    }

    /// Index of the tab under (`column`, `row`), if any.
    pub fn hit_test(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
        if row < area.y || row >= area.y + area.height {
            return None;
        }
        Self::cells(area, count)
            .iter()
            .position(|cell| column >= cell.x && column < cell.x + cell.width)
    }

    fn caption(&self, tab: &TabView) -> String {
        if self.show_icons {
            format!("{} {}", tab.icon, tab.label)
        } else {
            tab.label.to_string()
        }
    }
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (tab, cell) in self.tabs.iter().zip(Self::cells(inner, self.tabs.len())) {
            let style = if tab.selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            let caption = Paragraph::new(self.caption(tab))
                .alignment(Alignment::Center)
                .style(style);
            frame.render_widget(caption, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Tab;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn tabs(selected: Option<Tab>) -> Vec<TabView> {
        Tab::ALL
            .into_iter()
            .map(|tab| TabView {
                tab,
                label: tab.label(),
                icon: tab.icon(),
                selected: Some(tab) == selected,
            })
            .collect()
    }

    #[test]
    fn test_hit_test_splits_evenly() {
        let area = Rect::new(0, 10, 40, 1);
        assert_eq!(TabBar::hit_test(area, 2, 0, 10), Some(0));
        assert_eq!(TabBar::hit_test(area, 2, 19, 10), Some(0));
        assert_eq!(TabBar::hit_test(area, 2, 20, 10), Some(1));
        assert_eq!(TabBar::hit_test(area, 2, 39, 10), Some(1));
        assert_eq!(TabBar::hit_test(area, 2, 5, 9), None);
        assert_eq!(TabBar::hit_test(area, 0, 5, 10), None);
    }

    #[test]
    fn test_render_labels_without_icons() {
        let backend = TestBackend::new(40, TAB_BAR_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let views = tabs(Some(Tab::Home));
        let mut bar = TabBar::new(&views, false);
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Home"));
        assert!(text.contains("Profile"));
    }

    #[test]
    fn test_selected_tab_is_highlighted() {
        let backend = TestBackend::new(40, TAB_BAR_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let views = tabs(Some(Tab::Profile));
        let mut bar = TabBar::new(&views, false);
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        // Row 1 is the caption row; the right half belongs to Profile
        let left = buffer.cell((2, 1)).unwrap();
        let right = buffer.cell((22, 1)).unwrap();
        assert!(!left.modifier.contains(Modifier::REVERSED));
        assert!(right.modifier.contains(Modifier::REVERSED));
    }
}
