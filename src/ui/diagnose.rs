use crate::app::state::{AppState, DiagnosisSession};
use crate::ui::layout::compute_diagnosis_layout;
use crate::ui::primitives::{RadioGroup, Slider, TextInput};
use crate::ui::result::result_lines;
use crate::ui::theme::Theme;
use crate::wizard::steps::{StepId, STEPS, SUBMIT_STEP};
use crate::wizard::Wizard;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, session: &DiagnosisSession) {
    let wizard = &session.wizard;
    let l = compute_diagnosis_layout(area, wizard.error().is_some());

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("✚ ", Style::default().fg(Theme::ACCENT_BLUE)),
            Span::styled("HealthPredict AI", Theme::heading()),
        ])),
        l.brand,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(wizard.step().title, Theme::title())),
        l.title,
    );
    frame.render_widget(Paragraph::new(progress_line(wizard, l.progress.width)), l.progress);

    if let Some(error) = wizard.error() {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled("Error: ", Theme::error_banner().add_modifier(Modifier::BOLD)),
            Span::styled(error, Theme::error_banner()),
        ]))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::error_banner()),
        );
        frame.render_widget(banner, l.error);
    }

    render_body(frame, l.body, state, session);
    frame.render_widget(
        Paragraph::new(button_line(wizard, state.tick_count)),
        l.buttons,
    );
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState, session: &DiagnosisSession) {
    let wizard = &session.wizard;
    let form = wizard.form();
    match wizard.step().id {
        StepId::Name => TextInput::new("name", &form.name)
            .label("What's your name?")
            .placeholder("Enter your name")
            .render(frame, top(area, 3)),
        StepId::Symptom => TextInput::new("symptom", &form.symptom)
            .label("What's your main symptom?")
            .placeholder("Enter your main symptom")
            .render(frame, top(area, 3)),
        StepId::Duration => {
            let rules = wizard.rules();
            Slider::new(rules.duration_min, rules.duration_max, form.duration)
                .step(rules.duration_step)
                .label("How long have you been experiencing this symptom?")
                .render(frame, top(area, 5))
        }
        StepId::Questions => {
            let height = state.question_rows.len() as u16 + 2;
            RadioGroup::new(&state.question_rows, &form.additional_symptoms)
                .cursor(session.radio_cursor)
                .variant(state.config.ui.radio_variant)
                .size(state.config.ui.radio_size)
                .render(frame, top(area, height), "Please answer the following questions:")
        }
        StepId::Result => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(Theme::border_type_focused())
                .border_style(Theme::border_focused());
            let inner = block.inner(area);
            let lines = result_lines(
                wizard.prediction(),
                inner.width.min(48),
                state.config.ui.severity_bar_percent,
            );
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
                area,
            );
        }
    }
}

fn top(area: Rect, height: u16) -> Rect {
    Rect::new(area.x, area.y, area.width, height.min(area.height))
}

/// One segment per step, filled up to and including the current one.
fn progress_line(wizard: &Wizard, width: u16) -> Line<'static> {
    let seg = (width as usize / STEPS.len()).max(2);
    let spans = (0..STEPS.len())
        .map(|i| {
            let style = if i <= wizard.current_step() {
                Theme::progress_done()
            } else {
                Theme::progress_todo()
            };
            Span::styled(format!("{} ", "━".repeat(seg - 1)), style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Theme::key_hint()),
        Span::styled(format!(" {}   ", label), Theme::muted()),
    ]
}

fn button_line(wizard: &Wizard, tick: u64) -> Line<'static> {
    let step = wizard.current_step();
    let mut spans: Vec<Span> = Vec::new();

    if (1..=SUBMIT_STEP).contains(&step) {
        spans.extend(hint("⇧Tab", "Previous"));
    }
    if step < SUBMIT_STEP {
        spans.extend(hint("Enter", "Next"));
    }
    if step == SUBMIT_STEP {
        if wizard.is_loading() {
            let frame = SPINNER[(tick as usize) % SPINNER.len()];
            spans.push(Span::styled(
                format!("{} Processing", frame),
                Style::default().fg(Theme::ACCENT_AMBER),
            ));
        } else if wizard.can_submit() {
            spans.extend(hint("Enter", "Get Results"));
        } else {
            spans.push(Span::styled("Enter Get Results", Theme::disabled()));
            spans.push(Span::styled("   ", Theme::muted()));
        }
        if !wizard.is_loading() {
            spans.extend(hint("Space", "Select"));
        }
    }
    if step == STEPS.len() - 1 {
        spans.extend(hint("Enter", "Start Over"));
    }
    if !wizard.is_loading() {
        spans.extend(hint("Esc", "Home"));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardRules;

    fn submittable() -> Wizard {
        let mut w = Wizard::new(WizardRules::default());
        w.set_field("name", "Alice").unwrap();
        w.set_field("symptom", "cough").unwrap();
        for i in 0..3 {
            w.add_answer(format!("question-{}-no", i));
        }
        for _ in 0..SUBMIT_STEP {
            w.advance();
        }
        w
    }

    #[test]
    fn test_progress_marks_current_and_previous() {
        let mut w = Wizard::new(WizardRules::default());
        w.advance();
        let line = progress_line(&w, 50);
        let done = line
            .spans
            .iter()
            .filter(|s| s.style == Theme::progress_done())
            .count();
        assert_eq!(done, 2);
    }

    #[test]
    fn test_buttons_follow_step() {
        let w = Wizard::new(WizardRules::default());
        let text = button_line(&w, 0).to_string();
        assert!(text.contains("Next"));
        assert!(!text.contains("Previous"));

        let w = submittable();
        let text = button_line(&w, 0).to_string();
        assert!(text.contains("Previous"));
        assert!(text.contains("Get Results"));
        assert!(!text.contains("Next"));
    }

    #[test]
    fn test_processing_while_loading() {
        let mut w = submittable();
        w.begin_submit().unwrap();
        let text = button_line(&w, 3).to_string();
        assert!(text.contains("Processing"));
        assert!(!text.contains("Esc"));
    }
}
