//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::ui::primitives::{RadioSize, RadioVariant};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub predictor: PredictorConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Repair values that would break wizard invariants.
    pub fn normalize(&mut self) {
        self.wizard.duration_min = self.wizard.duration_min.max(1);
        self.wizard.duration_max = self.wizard.duration_max.max(self.wizard.duration_min);
        self.wizard.duration_step = self.wizard.duration_step.max(1);
        self.ui.severity_bar_percent = self.ui.severity_bar_percent.min(100);
        self.ui.tick_rate_ms = self.ui.tick_rate_ms.max(10);
    }
}

/// Where the prediction service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Full URL of the `POST` prediction route.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Intake wizard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    #[serde(default = "default_duration_min")]
    pub duration_min: u32,
    #[serde(default = "default_duration_max")]
    pub duration_max: u32,
    /// Days moved per slider key press.
    #[serde(default = "default_duration_step")]
    pub duration_step: u32,
    /// Yes/no questions asked on the additional questions step. The number of
    /// entries is the answer count required before submitting.
    #[serde(default = "default_questions")]
    pub questions: Vec<String>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            duration_min: default_duration_min(),
            duration_max: default_duration_max(),
            duration_step: default_duration_step(),
            questions: default_questions(),
        }
    }
}

/// UI appearance and refresh settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_severity_bar_percent")]
    pub severity_bar_percent: u16,
    /// Look of the yes/no answers: `default` or `button`.
    #[serde(default)]
    pub radio_variant: RadioVariant,
    /// Padding of the yes/no answers: `small`, `default` or `large`.
    #[serde(default)]
    pub radio_size: RadioSize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            severity_bar_percent: default_severity_bar_percent(),
            radio_variant: RadioVariant::default(),
            radio_size: RadioSize::default(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8000/predict".to_string()
}
fn default_duration_min() -> u32 {
    1
}
fn default_duration_max() -> u32 {
    30
}
fn default_duration_step() -> u32 {
    1
}
fn default_questions() -> Vec<String> {
    vec![
        "Do you have a fever?".to_string(),
        "Are you experiencing fatigue?".to_string(),
        "Do you have a cough?".to_string(),
    ]
}
fn default_tick_rate() -> u64 {
    100
}
fn default_severity_bar_percent() -> u16 {
    75
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/healthpredict/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.predictor.endpoint, "http://localhost:8000/predict");
        assert_eq!(cfg.wizard.duration_min, 1);
        assert_eq!(cfg.wizard.duration_max, 30);
        assert_eq!(cfg.wizard.questions.len(), 3);
        assert_eq!(cfg.ui.severity_bar_percent, 75);
        assert!(cfg.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [predictor]
            endpoint = "https://predict.example.org/api/predict"

            [wizard]
            questions = ["Do you have a headache?"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.predictor.endpoint, "https://predict.example.org/api/predict");
        assert_eq!(cfg.wizard.questions, vec!["Do you have a headache?".to_string()]);
        assert_eq!(cfg.wizard.duration_max, 30);
    }

    #[test]
    fn test_normalize() {
        let mut cfg: AppConfig = toml::from_str(
            r#"
            [wizard]
            duration_min = 0
            duration_max = 0

            duration_step = 0

            [ui]
            severity_bar_percent = 250
            tick_rate_ms = 0
            "#,
        )
        .unwrap();
        cfg.normalize();
        assert_eq!(cfg.wizard.duration_min, 1);
        assert_eq!(cfg.wizard.duration_max, 1);
        assert_eq!(cfg.wizard.duration_step, 1);
        assert_eq!(cfg.ui.severity_bar_percent, 100);
        assert_eq!(cfg.ui.tick_rate_ms, 10);
    }

    #[test]
    fn test_radio_style() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            radio_variant = "button"
            radio_size = "small"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.radio_variant, RadioVariant::Button);
        assert_eq!(cfg.ui.radio_size, RadioSize::Small);

        let cfg = AppConfig::default();
        assert_eq!(cfg.ui.radio_variant, RadioVariant::Default);
        assert_eq!(cfg.wizard.duration_step, 1);
    }

    #[test]
    fn test_unknown_radio_variant_rejected() {
        let err = toml::from_str::<AppConfig>("[ui]\nradio_variant = \"fancy\"\n");
        assert!(err.is_err());
    }
}
