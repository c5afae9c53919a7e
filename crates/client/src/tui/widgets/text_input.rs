use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::{
    tui::THEME,
    tui_adapter::{Event, KeyCode},
};

/// Editable single-line buffer behind a form field.
#[derive(Debug, Clone)]
pub struct InputState {
    pub value: String,
    max_chars: usize,
}

impl InputState {
    pub fn with_max(max_chars: usize) -> Self {
        InputState {
            value: String::new(),
            max_chars,
        }
    }

    /// Applies typing events. Returns whether the event was consumed.
    pub fn on_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(KeyCode::Char(c)) => {
                self.push(*c);
                true
            }
            Event::Key(KeyCode::Backspace) => {
                self.value.pop();
                true
            }
            Event::Paste(text) => {
                for c in text.chars() {
                    self.push(c);
                }
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    fn push(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if self.value.chars().count() < self.max_chars {
            self.value.push(c);
        }
    }
}

/// One rendered form line: label, value, and a block cursor when focused.
pub struct TextInput<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default().fg(THEME.palette.ui_highlight)
        } else {
            Style::default().fg(THEME.palette.ui_disabled)
        };

        let mut spans = vec![
            Span::styled(format!("{:<7}", self.label), label_style),
            Span::styled(self.value, Style::default().fg(THEME.palette.ui_text)),
        ];
        if self.focused {
            spans.push(Span::styled(
                "█",
                Style::default().fg(THEME.palette.accent),
            ));
        }

        Line::from(spans).render(area, buf);
    }
}
