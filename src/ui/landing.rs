use crate::app::state::{AppState, MENU_ITEMS};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const LOGO: [&str; 5] = [
    r" _   _            _ _   _     ____               _ _      _   ",
    r"| | | | ___  __ _| | |_| |__ |  _ \ _ __ ___  __| (_) ___| |_ ",
    r"| |_| |/ _ \/ _` | | __| '_ \| |_) | '__/ _ \/ _` | |/ __| __|",
    r"|  _  |  __/ (_| | | |_| | | |  __/| | |  __/ (_| | | (__| |_ ",
    r"|_| |_|\___|\__,_|_|\__|_| |_|_|   |_|  \___|\__,_|_|\___|\__|",
];

const FEATURES: [(&str, &str); 3] = [
    ("AI-Powered Analysis", "machine learning predictions from your symptoms"),
    ("Instant Results", "health insights in minutes, not days"),
    ("Secure & Private", "nothing you enter is stored"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|l| Line::from(Span::styled(*l, Theme::heading())))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Predict Your Health with ", Theme::title()),
        Span::styled("AI Precision", Theme::heading()),
    ]));
    lines.push(Line::from(""));
    for (title, desc) in FEATURES {
        lines.push(Line::from(vec![
            Span::styled("  ✚ ", Style::default().fg(Theme::ACCENT_BLUE)),
            Span::styled(title, Theme::title()),
            Span::styled(format!("  {}", desc), Theme::muted()),
        ]));
    }
    lines.push(Line::from(""));

    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let selected = i == state.menu_selected;
        let style = if selected {
            Theme::selected()
        } else {
            Theme::message_text()
        };
        let marker = if selected { "❯ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(format!(" {} ", item.label()), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("↑↓", Theme::key_hint()),
        Span::styled(" Navigate  ", Theme::muted()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" Open  ", Theme::muted()),
        Span::styled("s", Theme::key_hint()),
        Span::styled(" Start  ", Theme::muted()),
        Span::styled("q", Theme::key_hint()),
        Span::styled(" Quit", Theme::muted()),
    ]));

    let logo_w = LOGO.iter().map(|l| l.len()).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    let target = centered(area, logo_w, height);
    frame.render_widget(Paragraph::new(lines), target);
}
