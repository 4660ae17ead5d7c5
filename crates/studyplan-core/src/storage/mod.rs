mod config;

pub use config::{Config, EligibilityConfig, OutputConfig, PlanConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/studyplan[-dev]/` based on STUDYPLAN_ENV.
///
/// Set STUDYPLAN_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYPLAN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studyplan-dev")
    } else {
        base_dir.join("studyplan")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
