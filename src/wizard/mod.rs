//! The symptom-intake wizard.
//!
//! [`Wizard`] owns a [`WizardState`] and is the only thing that mutates it.
//! Navigation is linear over [`steps::STEPS`] with no validation gate; the
//! answers are only checked when the questions step submits them to a
//! [`Predictor`].

pub mod state;
pub mod steps;

use crate::config::WizardConfig;
use crate::predict::{PredictError, PredictionRequest, PredictionResult, Predictor};
pub use state::{FormData, WizardState};
use steps::{Step, RESULT_STEP, STEPS, SUBMIT_STEP};

/// Shown for every failed submission, whatever the cause.
pub const SUBMIT_ERROR_MESSAGE: &str =
    "An error occurred while making the prediction. Please try again.";

/// Limits the wizard enforces, taken from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardRules {
    pub duration_min: u32,
    pub duration_max: u32,
    /// Slider increment, at least 1.
    pub duration_step: u32,
    /// Number of answers required before submitting.
    pub question_count: usize,
}

impl WizardRules {
    pub fn from_config(config: &WizardConfig) -> Self {
        Self {
            duration_min: config.duration_min,
            duration_max: config.duration_max.max(config.duration_min),
            duration_step: config.duration_step.max(1),
            question_count: config.questions.len(),
        }
    }
}

impl Default for WizardRules {
    fn default() -> Self {
        Self {
            duration_min: 1,
            duration_max: 30,
            duration_step: 1,
            question_count: 3,
        }
    }
}

/// A raw value coming from an input primitive, interpreted per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n as i64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Synchronous transitions, as messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardMsg {
    Advance,
    Retreat,
    Reset,
    SetField { name: String, value: FieldValue },
    AddAnswer(String),
}

#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    rules: WizardRules,
}

impl Wizard {
    pub fn new(rules: WizardRules) -> Self {
        Self {
            state: WizardState::new(rules.duration_min),
            rules,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn rules(&self) -> &WizardRules {
        &self.rules
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn step(&self) -> &'static Step {
        &STEPS[self.state.current_step]
    }

    pub fn form(&self) -> &FormData {
        &self.state.form
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        self.state.prediction.as_ref()
    }

    /// Fold a message into the state.
    pub fn apply(&mut self, msg: WizardMsg) -> Result<(), WizardError> {
        match msg {
            WizardMsg::Advance => {
                self.advance();
            }
            WizardMsg::Retreat => {
                self.retreat();
            }
            WizardMsg::Reset => self.reset(),
            WizardMsg::SetField { name, value } => self.set_field(&name, value)?,
            WizardMsg::AddAnswer(value) => self.add_answer(value),
        }
        Ok(())
    }

    /// Move one step forward. Returns `false` at the last step.
    pub fn advance(&mut self) -> bool {
        if self.state.current_step < RESULT_STEP {
            self.state.current_step += 1;
            true
        } else {
            false
        }
    }

    /// Move one step back. Returns `false` at the first step.
    pub fn retreat(&mut self) -> bool {
        if self.state.current_step > 0 {
            self.state.current_step -= 1;
            true
        } else {
            false
        }
    }

    /// Back to the first step. Answers, prediction and error are kept.
    pub fn reset(&mut self) {
        self.state.current_step = 0;
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), WizardError> {
        let value = value.into();
        match name {
            "name" => self.state.form.name = expect_text(name, value)?,
            "symptom" => self.state.form.symptom = expect_text(name, value)?,
            "duration" => {
                let days = match value {
                    FieldValue::Number(n) => n,
                    FieldValue::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                        WizardError::InvalidValue {
                            field: name.to_string(),
                            reason: format!("'{}' is not a whole number of days", s),
                        }
                    })?,
                };
                self.state.form.duration = days.clamp(
                    self.rules.duration_min as i64,
                    self.rules.duration_max as i64,
                ) as u32;
            }
            other => return Err(WizardError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    pub fn add_answer(&mut self, value: impl Into<String>) {
        self.state.form.additional_symptoms.push(value.into());
    }

    pub fn is_submittable(&self) -> bool {
        let form = &self.state.form;
        !form.name.trim().is_empty()
            && !form.symptom.trim().is_empty()
            && form.duration > 0
            && form.additional_symptoms.len() == self.rules.question_count
    }

    /// Whether "Get Results" should be enabled right now.
    pub fn can_submit(&self) -> bool {
        self.state.current_step == SUBMIT_STEP && !self.state.is_loading && self.is_submittable()
    }

    pub fn prediction_request(&self) -> PredictionRequest {
        let form = &self.state.form;
        let mut symptoms = Vec::with_capacity(1 + form.additional_symptoms.len());
        symptoms.push(form.symptom.clone());
        symptoms.extend(form.additional_symptoms.iter().cloned());
        PredictionRequest {
            symptoms,
            days: form.duration,
        }
    }

    /// First half of a submission: mark the request in flight and hand back
    /// the payload. `None` means the submission was rejected and nothing
    /// changed.
    pub fn begin_submit(&mut self) -> Option<PredictionRequest> {
        if !self.can_submit() {
            tracing::debug!(
                step = self.state.current_step,
                loading = self.state.is_loading,
                submittable = self.is_submittable(),
                "submit rejected"
            );
            return None;
        }
        self.state.is_loading = true;
        self.state.error = None;
        Some(self.prediction_request())
    }

    /// Second half of a submission. Ignored unless a request is in flight.
    pub fn complete_submit(&mut self, outcome: Result<PredictionResult, PredictError>) {
        if !self.state.is_loading {
            tracing::debug!("prediction outcome arrived with no request in flight");
            return;
        }
        self.state.is_loading = false;
        match outcome {
            Ok(prediction) => {
                tracing::info!(disease = %prediction.predicted_disease, severity = %prediction.severity, "prediction received");
                self.state.prediction = Some(prediction);
                self.state.current_step = RESULT_STEP;
            }
            Err(e) => {
                tracing::warn!("Error making prediction: {}", e);
                self.state.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Submit and wait for the outcome. Returns `false` if the submission was
    /// rejected before reaching the predictor.
    pub async fn submit<P: Predictor + ?Sized>(&mut self, predictor: &P) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let outcome = predictor.predict(&request).await;
        self.complete_submit(outcome);
        true
    }
}

fn expect_text(field: &str, value: FieldValue) -> Result<String, WizardError> {
    match value {
        FieldValue::Text(s) => Ok(s),
        FieldValue::Number(n) => Err(WizardError::InvalidValue {
            field: field.to_string(),
            reason: format!("expected text, got number {}", n),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::testing::{flu, StubPredictor};

    fn filled_wizard() -> Wizard {
        let mut w = Wizard::new(WizardRules::default());
        w.set_field("name", "Alice").unwrap();
        w.set_field("symptom", "cough").unwrap();
        w.set_field("duration", 5u32).unwrap();
        for i in 0..3 {
            w.add_answer(format!("question-{}-yes", i));
        }
        w.state.current_step = SUBMIT_STEP;
        w
    }

    #[test]
    fn test_initial_state() {
        let w = Wizard::new(WizardRules::default());
        assert_eq!(w.state(), &WizardState::default());
        assert_eq!(w.step().title, "Your Name");
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut w = Wizard::new(WizardRules::default());
        assert!(!w.retreat());
        assert_eq!(w.current_step(), 0);

        let moves = [true, true, false, true, true, true, true, true, false, false, false, false, false, false];
        for forward in moves {
            let before = w.current_step();
            let moved = if forward { w.advance() } else { w.retreat() };
            let after = w.current_step();
            assert!(after <= RESULT_STEP);
            if moved {
                assert_eq!(after.abs_diff(before), 1);
            } else {
                assert_eq!(after, before);
                assert!(before == 0 || before == RESULT_STEP);
            }
        }
        assert_eq!(w.current_step(), 0);
    }

    #[test]
    fn test_advance_has_no_validation_gate() {
        let mut w = Wizard::new(WizardRules::default());
        assert!(w.advance());
        assert!(w.advance());
        assert!(w.advance());
        assert_eq!(w.current_step(), SUBMIT_STEP);
        assert!(w.form().name.is_empty());
    }

    #[test]
    fn test_set_field() {
        let mut w = Wizard::new(WizardRules::default());
        w.set_field("name", "Alice").unwrap();
        w.set_field("symptom", String::from("headache")).unwrap();
        w.set_field("duration", "12").unwrap();
        assert_eq!(w.form().name, "Alice");
        assert_eq!(w.form().symptom, "headache");
        assert_eq!(w.form().duration, 12);
    }

    #[test]
    fn test_duration_is_clamped() {
        let mut w = Wizard::new(WizardRules::default());
        w.set_field("duration", 99u32).unwrap();
        assert_eq!(w.form().duration, 30);
        w.set_field("duration", -4i64).unwrap();
        assert_eq!(w.form().duration, 1);
    }

    #[test]
    fn test_set_field_rejects_bad_input() {
        let mut w = Wizard::new(WizardRules::default());
        assert_eq!(
            w.set_field("age", "40"),
            Err(WizardError::UnknownField("age".into()))
        );
        assert!(matches!(
            w.set_field("duration", "a week"),
            Err(WizardError::InvalidValue { .. })
        ));
        assert!(matches!(
            w.set_field("name", 7u32),
            Err(WizardError::InvalidValue { .. })
        ));
        assert_eq!(w.state(), &WizardState::default());
    }

    #[test]
    fn test_is_submittable() {
        let w = filled_wizard();
        assert!(w.is_submittable());

        let mut blank_name = filled_wizard();
        blank_name.set_field("name", "   ").unwrap();
        assert!(!blank_name.is_submittable());

        let mut blank_symptom = filled_wizard();
        blank_symptom.set_field("symptom", "").unwrap();
        assert!(!blank_symptom.is_submittable());

        let mut zero_days = filled_wizard();
        zero_days.state.form.duration = 0;
        assert!(!zero_days.is_submittable());

        let mut too_few = filled_wizard();
        too_few.state.form.additional_symptoms.pop();
        assert!(!too_few.is_submittable());

        let mut too_many = filled_wizard();
        too_many.add_answer("question-0-no");
        assert!(!too_many.is_submittable());
    }

    #[test]
    fn test_prediction_request_payload() {
        let req = filled_wizard().prediction_request();
        assert_eq!(
            req.symptoms,
            vec!["cough", "question-0-yes", "question-1-yes", "question-2-yes"]
        );
        assert_eq!(req.days, 5);
    }

    #[test]
    fn test_submit_only_on_questions_step() {
        let mut w = filled_wizard();
        w.retreat();
        assert_eq!(w.begin_submit(), None);
        assert!(!w.is_loading());
    }

    #[test]
    fn test_submit_while_loading_is_noop() {
        let mut w = filled_wizard();
        assert!(w.begin_submit().is_some());
        let snapshot = w.state().clone();
        assert_eq!(w.begin_submit(), None);
        assert_eq!(w.state(), &snapshot);
    }

    #[tokio::test]
    async fn test_submit_while_loading_never_reaches_predictor() {
        let stub = StubPredictor::succeeding(flu());
        let mut w = filled_wizard();
        w.begin_submit();
        assert!(!w.submit(&stub).await);
        assert_eq!(stub.call_count(), 0);
    }

    #[test]
    fn test_success_forces_result_step() {
        let mut w = filled_wizard();
        w.begin_submit().unwrap();
        // The user wandered back while the request was in flight.
        w.retreat();
        w.retreat();
        w.complete_submit(Ok(flu()));
        assert_eq!(w.current_step(), RESULT_STEP);
        assert_eq!(w.prediction(), Some(&flu()));
        assert!(!w.is_loading());
    }

    #[test]
    fn test_failure_keeps_step_and_prediction() {
        let mut w = filled_wizard();
        let earlier = PredictionResult {
            predicted_disease: "Allergy".into(),
            severity: "mild".into(),
            description: "Seasonal.".into(),
            precautions: vec![],
        };
        w.state.prediction = Some(earlier.clone());

        w.begin_submit().unwrap();
        w.complete_submit(Err(PredictError::InvalidResponse("bad".into())));
        assert_eq!(w.current_step(), SUBMIT_STEP);
        assert_eq!(w.error(), Some(SUBMIT_ERROR_MESSAGE));
        assert_eq!(w.prediction(), Some(&earlier));
        assert!(!w.is_loading());
    }

    #[test]
    fn test_next_attempt_clears_error() {
        let mut w = filled_wizard();
        w.begin_submit().unwrap();
        w.complete_submit(Err(PredictError::InvalidResponse("bad".into())));
        assert!(w.error().is_some());
        w.begin_submit().unwrap();
        assert_eq!(w.error(), None);
    }

    #[test]
    fn test_stray_outcome_is_ignored() {
        let mut w = filled_wizard();
        w.complete_submit(Ok(flu()));
        assert_eq!(w.prediction(), None);
        assert_eq!(w.current_step(), SUBMIT_STEP);
    }

    #[test]
    fn test_reset_keeps_answers() {
        let mut w = filled_wizard();
        w.begin_submit().unwrap();
        w.complete_submit(Ok(flu()));
        w.reset();
        assert_eq!(w.current_step(), 0);
        assert_eq!(w.form().name, "Alice");
        assert_eq!(w.prediction(), Some(&flu()));
    }

    #[tokio::test]
    async fn test_full_intake_scenario() {
        let stub = StubPredictor::succeeding(flu());
        let mut w = Wizard::new(WizardRules::default());

        let script = vec![
            WizardMsg::SetField { name: "name".into(), value: "Alice".into() },
            WizardMsg::Advance,
            WizardMsg::SetField { name: "symptom".into(), value: "cough".into() },
            WizardMsg::Advance,
            WizardMsg::SetField { name: "duration".into(), value: 5u32.into() },
            WizardMsg::Advance,
            WizardMsg::AddAnswer("yes".into()),
            WizardMsg::AddAnswer("yes".into()),
            WizardMsg::AddAnswer("yes".into()),
        ];
        for msg in script {
            w.apply(msg).unwrap();
        }

        assert!(w.submit(&stub).await);
        assert_eq!(w.current_step(), 4);
        assert_eq!(w.prediction().unwrap().predicted_disease, "Flu");
        assert!(!w.is_loading());
        assert_eq!(
            stub.requests.lock().unwrap()[0],
            PredictionRequest {
                symptoms: vec!["cough".into(), "yes".into(), "yes".into(), "yes".into()],
                days: 5,
            }
        );
    }

    #[test]
    fn test_state_serializes() {
        let w = filled_wizard();
        let json = serde_json::to_string(w.state()).unwrap();
        let back: WizardState = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, w.state());
    }
}
