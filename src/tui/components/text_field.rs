//! # TextField Component
//!
//! Single-line text input used for the add-item and search fields.
//!
//! ## State Management
//!
//! The buffer mirrors a string owned by `App` (`item_text` or `search_query`).
//! Edits are reported upward as `FieldEvent::Edited` and the parent forwards
//! the new text to `core::update`. When the core changes the string itself
//! (clearing the add field after an add), `sync` pulls it back in.
//!
//! Rendering goes through `TextFieldView`, a `Widget`, so the field can be
//! drawn into an off-screen buffer while a screen transition plays.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Offset from area edge to content (border width)
const BORDER_OFFSET: u16 = 1;
/// Top + bottom borders
pub const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Buffer contents changed
    Edited,
    /// Only the cursor moved
    Moved,
    /// Enter pressed
    Submit,
}

#[derive(Debug, Clone, Default)]
pub struct TextField {
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Adopt `text` if it differs from the buffer. The cursor is clamped to
    /// the new contents (moved to the end when the text was replaced).
    pub fn sync(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_string();
            self.cursor = self.buffer.len();
        }
    }

    /// Display columns before the cursor.
    fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// First display column shown, so the cursor stays inside `inner_width`.
    fn scroll_column(&self, inner_width: u16) -> usize {
        if inner_width == 0 {
            return 0;
        }
        self.cursor_column().saturating_sub(usize::from(inner_width) - 1)
    }

    /// Text visible from display column `skip` onward.
    fn visible_text(&self, skip: usize) -> &str {
        let mut column = 0usize;
        for (index, c) in self.buffer.char_indices() {
            if column >= skip {
                return &self.buffer[index..];
            }
            column += c.width().unwrap_or(0);
        }
        ""
    }

    /// Screen position of the cursor for a field rendered into `area`.
    pub fn screen_pos(&self, area: Rect) -> (u16, u16) {
        let inner_width = area.width.saturating_sub(2 * BORDER_OFFSET);
        let offset = self.cursor_column() - self.scroll_column(inner_width);
        let column = u16::try_from(offset).unwrap_or(u16::MAX);
        (
            area.x.saturating_add(BORDER_OFFSET).saturating_add(column),
            area.y + BORDER_OFFSET,
        )
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(FieldEvent::Edited)
            }
            TuiEvent::Paste(text) => {
                // Single line: fold line breaks into spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                if flat.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(FieldEvent::Edited)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(FieldEvent::Edited)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(FieldEvent::Edited)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                FieldEvent::Moved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                FieldEvent::Moved
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldEvent::Moved
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                FieldEvent::Moved
            }),
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}

/// Transient render wrapper for a `TextField`.
pub struct TextFieldView<'a> {
    pub field: &'a TextField,
    pub title: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
}

impl Widget for TextFieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title);

        let paragraph = if self.field.text().is_empty() {
            Paragraph::new(self.placeholder).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let inner_width = area.width.saturating_sub(2 * BORDER_OFFSET);
            let skip = self.field.scroll_column(inner_width);
            Paragraph::new(self.field.visible_text(skip))
        };

        paragraph.block(block).render(area, buf);
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
