//! Result step content.
//!
//! A pure mapping from the received prediction to display lines. The severity
//! bar always fills the same proportion; it is not derived from the severity
//! label.

use crate::predict::PredictionResult;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

pub const PLACEHOLDER: &str = "No prediction available";

pub fn result_lines(
    prediction: Option<&PredictionResult>,
    bar_width: u16,
    bar_percent: u16,
) -> Vec<Line<'static>> {
    let Some(p) = prediction else {
        return vec![Line::from(Span::styled(PLACEHOLDER, Theme::muted())).alignment(Alignment::Center)];
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Prediction: {}", p.predicted_disease),
            Theme::heading(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        severity_bar(bar_width, bar_percent).alignment(Alignment::Center),
        Line::from(Span::styled(format!("Severity: {}", p.severity), Theme::muted()))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(p.description.clone(), Theme::message_text())),
        Line::from(""),
        Line::from(Span::styled("Precautions:", Theme::title())),
    ];
    lines.extend(p.precautions.iter().map(|precaution| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(Theme::ACCENT_BLUE)),
            Span::styled(precaution.clone(), Theme::message_text()),
        ])
    }));
    lines
}

fn severity_bar(width: u16, percent: u16) -> Line<'static> {
    let width = width as usize;
    let filled = width * percent.min(100) as usize / 100;
    Line::from(vec![
        Span::styled("█".repeat(filled), Theme::progress_done()),
        Span::styled("░".repeat(width - filled), Theme::progress_todo()),
    ])
}
