//! Prediction service collaborator.
//!
//! The diagnosis itself is computed by an external HTTP service. This module
//! defines the wire types, the [`Predictor`] seam the wizard submits through,
//! and the reqwest-backed implementation.

pub mod client;
pub mod manager;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Primary symptom followed by the additional answers.
    pub symptoms: Vec<String>,
    pub days: u32,
}

/// A successful response from the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_disease: String,
    pub severity: String,
    pub description: String,
    pub precautions: Vec<String>,
}

/// Errors from a prediction attempt. The wizard collapses all of them into a
/// single user-facing message; the variants exist for the log.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("prediction service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Anything that can turn collected symptoms into a diagnosis.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Canned predictor that records every request it receives.
    pub struct StubPredictor {
        response: Option<PredictionResult>,
        pub calls: AtomicUsize,
        pub requests: Mutex<Vec<PredictionRequest>>,
    }

    impl StubPredictor {
        pub fn succeeding(result: PredictionResult) -> Self {
            Self {
                response: Some(result),
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                response: None,
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Predictor for StubPredictor {
        async fn predict(
            &self,
            request: &PredictionRequest,
        ) -> Result<PredictionResult, PredictError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            self.response.clone().ok_or_else(|| PredictError::Status {
                status: 500,
                body: "model unavailable".to_string(),
            })
        }
    }

    pub fn flu() -> PredictionResult {
        PredictionResult {
            predicted_disease: "Flu".to_string(),
            severity: "Mild".to_string(),
            description: "...".to_string(),
            precautions: vec!["Rest".to_string()],
        }
    }
}
