use crate::predict::PredictionResult;
use serde::{Deserialize, Serialize};

/// Answers collected so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub symptom: String,
    /// Days the main symptom has lasted.
    pub duration: u32,
    /// Raw radio values from the questions step, in selection order. Not keyed
    /// by question.
    pub additional_symptoms: Vec<String>,
}

impl FormData {
    pub fn new(duration: u32) -> Self {
        Self {
            name: String::new(),
            symptom: String::new(),
            duration,
            additional_symptoms: Vec::new(),
        }
    }
}

/// Everything the intake flow knows. Mutated only through [`super::Wizard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub current_step: usize,
    pub form: FormData,
    pub is_loading: bool,
    pub prediction: Option<PredictionResult>,
    pub error: Option<String>,
}

impl WizardState {
    pub fn new(initial_duration: u32) -> Self {
        Self {
            current_step: 0,
            form: FormData::new(initial_duration),
            is_loading: false,
            prediction: None,
            error: None,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(1)
    }
}
