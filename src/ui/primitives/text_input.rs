use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// A change coming out of a [`TextInput`]: the field it belongs to and the
/// complete new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputChange {
    pub name: &'static str,
    pub value: String,
}

/// Single-line text field. The value is always supplied by the caller; the
/// cursor sits at the end of it.
pub struct TextInput<'a> {
    name: &'static str,
    value: &'a str,
    label: &'a str,
    placeholder: &'a str,
}

impl<'a> TextInput<'a> {
    pub fn new(name: &'static str, value: &'a str) -> Self {
        Self {
            name,
            value,
            label: "",
            placeholder: "",
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Translate a key press into the edited value, if it edits anything.
    pub fn handle_key(&self, key: KeyEvent) -> Option<InputChange> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let value = match key.code {
            KeyCode::Char('w') if ctrl => delete_word_back(self.value),
            KeyCode::Char('u') if ctrl => String::new(),
            KeyCode::Char(c) if !ctrl && !alt => {
                let mut v = self.value.to_string();
                v.push(c);
                v
            }
            KeyCode::Backspace => {
                let mut v = self.value.to_string();
                v.pop();
                v
            }
            _ => return None,
        };
        (value != self.value).then(|| InputChange {
            name: self.name,
            value,
        })
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type_focused())
            .border_style(Theme::border_focused())
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text = if self.value.is_empty() {
            Span::styled(self.placeholder, Theme::placeholder())
        } else {
            Span::styled(self.value, Theme::input_text())
        };
        let line = Line::from(vec![
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
            text,
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        let cursor_x = cursor_column(inner.x, self.value);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

/// Column just past `value`, after the 2-cell prompt. Saturates on very long
/// values.
fn cursor_column(x: u16, value: &str) -> u16 {
    let width = u16::try_from(value.width()).unwrap_or(u16::MAX);
    x.saturating_add(2).saturating_add(width)
}

fn delete_word_back(value: &str) -> String {
    let trimmed = value.trim_end_matches(' ');
    match trimmed.rfind(' ') {
        Some(idx) => trimmed[..=idx].to_string(),
        None => String::new(),
    }
}
