use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::primitives::{RadioGroup, RadioMsg, Slider, TextInput};
use crate::wizard::steps::{StepId, SUBMIT_STEP};
use crate::wizard::{Wizard, WizardMsg};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::PredictionSettled(outcome) => {
            match state.session_mut() {
                Some(session) => session.wizard.complete_submit(outcome),
                None => tracing::debug!("prediction outcome dropped: diagnosis screen closed"),
            }
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    // Only the loading spinner animates
    if state.session().is_some_and(|s| s.wizard.is_loading()) {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.screen {
        Screen::Landing => handle_landing_key(state, key),
        Screen::Legal(_) => handle_legal_key(state, key),
        Screen::Diagnosis(_) => handle_diagnosis_key(state, key),
    }
}

fn handle_landing_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.menu_up();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.menu_down();
            vec![]
        }
        KeyCode::Char('s') => {
            state.enter_diagnosis();
            vec![]
        }
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Enter => match state.selected_menu_item() {
            MenuItem::StartDiagnosis => {
                state.enter_diagnosis();
                vec![]
            }
            MenuItem::Privacy => {
                state.open_legal(LegalPage::Privacy);
                vec![]
            }
            MenuItem::Terms => {
                state.open_legal(LegalPage::Terms);
                vec![]
            }
            MenuItem::Quit => vec![Action::Quit],
        },
        _ => vec![],
    }
}

fn handle_legal_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q')
    ) {
        state.leave_to_landing();
    }
    vec![]
}

fn handle_diagnosis_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Esc {
        if !state.leave_to_landing() {
            tracing::debug!("cannot leave diagnosis while a prediction is in flight");
        }
        return vec![];
    }

    let AppState {
        screen,
        question_rows,
        ..
    } = state;
    let Screen::Diagnosis(session) = screen else {
        return vec![];
    };
    let wizard = &mut session.wizard;
    let step = wizard.current_step();
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Button row: Previous on 1..=3, Next on 0..=2, Get Results on 3,
    // Start Over on the result step
    match key.code {
        KeyCode::BackTab => {
            if (1..=SUBMIT_STEP).contains(&step) {
                fold(wizard, WizardMsg::Retreat);
            }
            return vec![];
        }
        KeyCode::Left if alt => {
            if (1..=SUBMIT_STEP).contains(&step) {
                fold(wizard, WizardMsg::Retreat);
            }
            return vec![];
        }
        KeyCode::Tab => {
            if step < SUBMIT_STEP {
                fold(wizard, WizardMsg::Advance);
            }
            return vec![];
        }
        KeyCode::Enter => {
            return match wizard.step().id {
                StepId::Name | StepId::Symptom | StepId::Duration => {
                    fold(wizard, WizardMsg::Advance);
                    vec![]
                }
                StepId::Questions => match wizard.begin_submit() {
                    Some(request) => {
                        tracing::info!(days = request.days, "submitting symptoms for prediction");
                        vec![Action::SubmitPrediction(request)]
                    }
                    None => vec![],
                },
                StepId::Result => {
                    fold(wizard, WizardMsg::Reset);
                    vec![]
                }
            };
        }
        _ => {}
    }

    match wizard.step().id {
        StepId::Name | StepId::Symptom => {
            let field = wizard.step().id.as_str();
            let value = match wizard.step().id {
                StepId::Name => &wizard.form().name,
                _ => &wizard.form().symptom,
            };
            let change = TextInput::new(field, value).handle_key(key);
            if let Some(change) = change {
                fold(
                    wizard,
                    WizardMsg::SetField {
                        name: change.name.to_string(),
                        value: change.value.into(),
                    },
                );
            }
        }
        StepId::Duration => {
            let rules = wizard.rules();
            let slider = Slider::new(rules.duration_min, rules.duration_max, wizard.form().duration)
                .step(rules.duration_step);
            if let Some(values) = slider.handle_key(key) {
                fold(
                    wizard,
                    WizardMsg::SetField {
                        name: "duration".to_string(),
                        value: values[0].into(),
                    },
                );
            }
        }
        StepId::Questions => {
            let msg = RadioGroup::new(question_rows.as_slice(), &wizard.form().additional_symptoms)
                .cursor(session.radio_cursor)
                .handle_key(key);
            match msg {
                Some(RadioMsg::Focus(cursor)) => session.radio_cursor = cursor,
                Some(RadioMsg::Change(value)) => fold(wizard, WizardMsg::AddAnswer(value)),
                None => {}
            }
        }
        StepId::Result => {}
    }

    vec![]
}

fn fold(wizard: &mut Wizard, msg: WizardMsg) {
    if let Err(e) = wizard.apply(msg) {
        tracing::warn!("{}", e);
    }
}
