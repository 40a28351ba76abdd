pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig, WizardConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("healthpredict")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

/// Load and normalize the config at `path`. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let mut config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config.normalize();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg.predictor.endpoint, "http://localhost:8000/predict");
        assert_eq!(cfg.wizard.questions.len(), 3);
    }

    #[test]
    fn test_malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[wizard\nduration_min = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to parse config file"));
        assert!(message.contains(&path.display().to_string()));
    }

    #[test]
    fn test_load_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[wizard]\nduration_min = 0\nduration_max = 0\n\n[ui]\ntick_rate_ms = 0\n",
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.wizard.duration_min, 1);
        assert_eq!(cfg.wizard.duration_max, 1);
        assert_eq!(cfg.ui.tick_rate_ms, 10);
    }
}
