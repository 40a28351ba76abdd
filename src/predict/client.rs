//! HTTP client for the prediction service.
//!
//! One `POST` per submission, no retries and no client-side timeout.

use async_trait::async_trait;
use reqwest::Client;

use super::{PredictError, PredictionRequest, PredictionResult, Predictor};

#[derive(Debug, Clone)]
pub struct HttpPredictor {
    http: Client,
    endpoint: String,
}

impl HttpPredictor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictError> {
        tracing::debug!(endpoint = %self.endpoint, symptoms = request.symptoms.len(), days = request.days, "sending prediction request");

        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(PredictError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<PredictionResult>(&body)
            .map_err(|e| PredictError::InvalidResponse(format!("failed to parse prediction: {e}")))
    }
}
