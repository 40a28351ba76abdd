use crate::predict::PredictionRequest;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    SubmitPrediction(PredictionRequest),
    Quit,
}
