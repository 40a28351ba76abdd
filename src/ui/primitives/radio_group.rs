use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadioVariant {
    #[default]
    Default,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadioSize {
    Small,
    #[default]
    Default,
    Large,
}

/// A labelled radio control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioItem {
    pub value: String,
    pub label: String,
}

impl RadioItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One line of items followed by a caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioRow {
    pub caption: String,
    pub items: Vec<RadioItem>,
}

impl RadioRow {
    /// Yes/No pair for question `index`, valued `question-<index>-yes|no`.
    pub fn yes_no(index: usize, question: &str) -> Self {
        Self {
            caption: question.to_string(),
            items: vec![
                RadioItem::new(format!("question-{}-yes", index), "Yes"),
                RadioItem::new(format!("question-{}-no", index), "No"),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RadioCursor {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioMsg {
    /// The highlighted item moved.
    Focus(RadioCursor),
    /// An unchecked item was selected; carries its value.
    Change(String),
}

/// Container for radio items. Selecting any item inside the group is reported
/// through one message carrying that item's value. Which items are checked is
/// decided by the caller.
pub struct RadioGroup<'a> {
    rows: &'a [RadioRow],
    checked: &'a [String],
    cursor: RadioCursor,
    variant: RadioVariant,
    size: RadioSize,
}

impl<'a> RadioGroup<'a> {
    pub fn new(rows: &'a [RadioRow], checked: &'a [String]) -> Self {
        Self {
            rows,
            checked,
            cursor: RadioCursor::default(),
            variant: RadioVariant::default(),
            size: RadioSize::default(),
        }
    }

    pub fn cursor(mut self, cursor: RadioCursor) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn variant(mut self, variant: RadioVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: RadioSize) -> Self {
        self.size = size;
        self
    }

    fn item(&self, at: RadioCursor) -> Option<&RadioItem> {
        self.rows.get(at.row).and_then(|r| r.items.get(at.col))
    }

    fn is_checked(&self, item: &RadioItem) -> bool {
        self.checked.iter().any(|v| *v == item.value)
    }

    /// Select the item under `at`. Already-checked items emit nothing.
    pub fn select(&self, at: RadioCursor) -> Option<String> {
        let item = self.item(at)?;
        (!self.is_checked(item)).then(|| item.value.clone())
    }

    pub fn handle_key(&self, key: KeyEvent) -> Option<RadioMsg> {
        if self.rows.is_empty() {
            return None;
        }
        let RadioCursor { row, col } = self.cursor;
        let row_len = |r: usize| self.rows.get(r).map(|r| r.items.len()).unwrap_or(0);
        let moved = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let row = row.saturating_sub(1);
                RadioCursor { row, col: col.min(row_len(row).saturating_sub(1)) }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let row = (row + 1).min(self.rows.len() - 1);
                RadioCursor { row, col: col.min(row_len(row).saturating_sub(1)) }
            }
            KeyCode::Left | KeyCode::Char('h') => RadioCursor { row, col: col.saturating_sub(1) },
            KeyCode::Right | KeyCode::Char('l') => RadioCursor {
                row,
                col: (col + 1).min(row_len(row).saturating_sub(1)),
            },
            KeyCode::Char(' ') => return self.select(self.cursor).map(RadioMsg::Change),
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                return self.select(RadioCursor { row, col: 0 }).map(RadioMsg::Change)
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                return self.select(RadioCursor { row, col: 1 }).map(RadioMsg::Change)
            }
            _ => return None,
        };
        (moved != self.cursor).then_some(RadioMsg::Focus(moved))
    }

    fn item_spans(&self, at: RadioCursor, item: &RadioItem) -> Vec<Span<'static>> {
        let checked = self.is_checked(item);
        let focused = at == self.cursor;
        let pad = match self.size {
            RadioSize::Small => "",
            RadioSize::Default => " ",
            RadioSize::Large => "  ",
        };
        let text = match self.variant {
            RadioVariant::Default => {
                let mark = if checked { "(•)" } else { "( )" };
                format!("{} {}{}", mark, item.label, pad)
            }
            RadioVariant::Button => format!("[{}{}{}]", pad, item.label, pad),
        };
        let style = match (self.variant, checked, focused) {
            (_, _, true) => Theme::selected(),
            (RadioVariant::Button, true, false) => Theme::checked_button(),
            (_, true, false) => Style::default().fg(Theme::ACCENT_GREEN),
            _ => Theme::input_text(),
        };
        vec![Span::styled(text, style), Span::raw(" ")]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type_focused())
            .border_style(Theme::border_focused());

        let mut lines: Vec<Line> = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            let mut spans = vec![Span::raw(" ")];
            for (c, item) in row.items.iter().enumerate() {
                spans.extend(self.item_spans(RadioCursor { row: r, col: c }, item));
            }
            spans.push(Span::styled(format!(" {}", row.caption), Theme::message_text()));
            lines.push(Line::from(spans));
            if self.size == RadioSize::Large {
                lines.push(Line::from(""));
            }
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn rows() -> Vec<RadioRow> {
        ["Do you have a fever?", "Are you experiencing fatigue?", "Do you have a cough?"]
            .iter()
            .enumerate()
            .map(|(i, q)| RadioRow::yes_no(i, q))
            .collect()
    }

    #[test]
    fn test_select_emits_item_value_once() {
        let rows = rows();
        let group = RadioGroup::new(&rows, &[]);
        let emitted: Vec<_> = group
            .handle_key(key(KeyCode::Char(' ')))
            .into_iter()
            .collect();
        assert_eq!(emitted, vec![RadioMsg::Change("question-0-yes".into())]);
    }

    #[test]
    fn test_checked_item_is_silent() {
        let rows = rows();
        let checked = vec!["question-0-yes".to_string()];
        let group = RadioGroup::new(&rows, &checked);
        assert_eq!(group.select(RadioCursor { row: 0, col: 0 }), None);
        assert_eq!(
            group.select(RadioCursor { row: 0, col: 1 }),
            Some("question-0-no".into())
        );
    }

    #[test]
    fn test_yes_no_shortcuts_use_cursor_row() {
        let rows = rows();
        let group = RadioGroup::new(&rows, &[]).cursor(RadioCursor { row: 2, col: 0 });
        assert_eq!(
            group.handle_key(key(KeyCode::Char('n'))),
            Some(RadioMsg::Change("question-2-no".into()))
        );
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        let rows = rows();
        let group = RadioGroup::new(&rows, &[]);
        assert_eq!(group.handle_key(key(KeyCode::Up)), None);
        assert_eq!(group.handle_key(key(KeyCode::Left)), None);
        assert_eq!(
            group.handle_key(key(KeyCode::Down)),
            Some(RadioMsg::Focus(RadioCursor { row: 1, col: 0 }))
        );
        assert_eq!(
            group.handle_key(key(KeyCode::Right)),
            Some(RadioMsg::Focus(RadioCursor { row: 0, col: 1 }))
        );

        let bottom_right = RadioGroup::new(&rows, &[]).cursor(RadioCursor { row: 2, col: 1 });
        assert_eq!(bottom_right.handle_key(key(KeyCode::Down)), None);
        assert_eq!(bottom_right.handle_key(key(KeyCode::Right)), None);
    }

    #[test]
    fn test_variants_are_cosmetic() {
        let rows = rows();
        let plain = RadioGroup::new(&rows, &[]);
        let button = RadioGroup::new(&rows, &[])
            .variant(RadioVariant::Button)
            .size(RadioSize::Large);
        let at = RadioCursor { row: 1, col: 1 };
        assert_eq!(plain.select(at), button.select(at));
    }
}
