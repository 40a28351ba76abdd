//! The fixed step sequence of the intake flow.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    Name,
    Symptom,
    Duration,
    Questions,
    Result,
}

#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub id: StepId,
    pub title: &'static str,
}

pub const STEPS: [Step; 5] = [
    Step { id: StepId::Name, title: "Your Name" },
    Step { id: StepId::Symptom, title: "Main Symptom" },
    Step { id: StepId::Duration, title: "Symptom Duration" },
    Step { id: StepId::Questions, title: "Additional Questions" },
    Step { id: StepId::Result, title: "Your Results" },
];

pub const STEP_COUNT: usize = STEPS.len();
pub const RESULT_STEP: usize = STEP_COUNT - 1;
/// The step that submits; always the one right before the result.
pub const SUBMIT_STEP: usize = STEP_COUNT - 2;

impl StepId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::Name => "name",
            StepId::Symptom => "symptom",
            StepId::Duration => "duration",
            StepId::Questions => "questions",
            StepId::Result => "result",
        }
    }
}
