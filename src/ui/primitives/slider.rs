use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Range control over `min..=max`.
pub struct Slider<'a> {
    label: &'a str,
    min: u32,
    max: u32,
    step: u32,
    value: u32,
}

impl<'a> Slider<'a> {
    pub fn new(min: u32, max: u32, value: u32) -> Self {
        Self {
            label: "",
            min,
            max: max.max(min),
            step: 1,
            value,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn step(mut self, step: u32) -> Self {
        self.step = step.max(1);
        self
    }

    /// Wrap a raw value the way every slider change is reported: as a
    /// one-element list, one entry per handle.
    pub fn change(&self, raw: u32) -> Vec<u32> {
        vec![raw]
    }

    pub fn handle_key(&self, key: KeyEvent) -> Option<Vec<u32>> {
        let next = match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                self.value.saturating_sub(self.step).max(self.min)
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
                self.value.saturating_add(self.step).min(self.max)
            }
            KeyCode::Home => self.min,
            KeyCode::End => self.max,
            _ => return None,
        };
        (next != self.value).then(|| self.change(next))
    }

    /// Column of the handle on a track `width` cells wide.
    fn handle_position(&self, width: u16) -> u16 {
        if width <= 1 || self.max == self.min {
            return 0;
        }
        let span = (self.max - self.min) as u64;
        let offset = self.value.clamp(self.min, self.max) as u64 - self.min as u64;
        (offset * (width as u64 - 1) / span) as u16
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type_focused())
            .border_style(Theme::border_focused());

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width < 4 || inner.height == 0 {
            return;
        }

        let min_label = self.min.to_string();
        let max_label = self.max.to_string();
        let track_w = inner
            .width
            .saturating_sub((min_label.len() + max_label.len() + 2) as u16);
        let pos = self.handle_position(track_w) as usize;
        let track_w = track_w as usize;

        let track = Line::from(vec![
            Span::styled(format!("{} ", min_label), Theme::muted()),
            Span::styled("━".repeat(pos), Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled("●", Style::default().fg(Theme::ACCENT_AMBER)),
            Span::styled(
                "─".repeat(track_w.saturating_sub(pos + 1)),
                Style::default().fg(Theme::BORDER_DIM),
            ),
            Span::styled(format!(" {}", max_label), Theme::muted()),
        ]);

        let mut lines = vec![track];
        if inner.height > 1 {
            lines.push(Line::from(""));
        }
        lines.push(
            Line::from(Span::styled(format!("{} day(s)", self.value), Theme::input_text()))
                .alignment(Alignment::Center),
        );
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
