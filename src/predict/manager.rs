//! Runs prediction requests off the UI loop.
//!
//! The event loop must keep rendering while a request is in flight, so each
//! submission is spawned as a task whose outcome comes back as an
//! [`AppEvent::PredictionSettled`].

use crate::app::event::AppEvent;
use crate::predict::{PredictionRequest, Predictor};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct PredictionManager {
    predictor: Arc<dyn Predictor>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl PredictionManager {
    pub fn new(predictor: Arc<dyn Predictor>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { predictor, event_tx }
    }

    pub fn submit(&self, request: PredictionRequest) {
        let predictor = Arc::clone(&self.predictor);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = predictor.predict(&request).await;
            let _ = event_tx.send(AppEvent::PredictionSettled(outcome));
        });
    }
}
