use crate::app::state::LegalPage;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

fn body(page: LegalPage) -> &'static [&'static str] {
    match page {
        LegalPage::Privacy => &[
            "Answers you enter are kept in memory only for the current diagnosis.",
            "They are sent once to the configured prediction service when you ask for results.",
            "Leaving the diagnosis screen discards them. Nothing is written to disk.",
        ],
        LegalPage::Terms => &[
            "Predictions are produced by a statistical model and are not a medical diagnosis.",
            "Always consult a qualified health professional about your symptoms.",
            "The service is provided as is, without warranty of any kind.",
        ],
    }
}

pub fn render(frame: &mut Frame, area: Rect, page: LegalPage) {
    let block = Block::default()
        .title(format!(" {} · Esc to go back ", page.title()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Style::default().bg(Theme::BG_SURFACE));

    let lines: Vec<Line> = body(page)
        .iter()
        .flat_map(|p| [Line::from(Span::styled(*p, Theme::message_text())), Line::from("")])
        .collect();

    let target = centered(area, 72, lines.len() as u16 + 2);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        target,
    );
}
