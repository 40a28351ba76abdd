use crate::predict::{PredictError, PredictionResult};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The in-flight prediction request finished
    PredictionSettled(Result<PredictionResult, PredictError>),

    /// Tick for UI refresh
    Tick,
}
