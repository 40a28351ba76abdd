//! HealthPredict: a terminal symptom-intake wizard backed by a disease
//! prediction service.

pub mod app;
pub mod config;
pub mod logging;
pub mod predict;
pub mod ui;
pub mod wizard;
