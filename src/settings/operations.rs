//! Settings loading, validation, and environment overrides.

use super::model::Settings;
use crate::error::{PromptError, Result};
use std::path::Path;
use tracing::debug;

/// Environment variable overriding `model_name`.
pub const ENV_MODEL_NAME: &str = "MODEL_NAME";
/// Environment variable overriding `temperature`.
pub const ENV_TEMPERATURE: &str = "TEMPERATURE";
/// Environment variable overriding `log_level`.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

impl Settings {
    /// Load settings from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string. An empty document yields defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = if yaml.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                PromptError::UserError(format!("failed to parse settings YAML: {}", e))
            })?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize settings to YAML: {}", e))
        })
    }

    /// Validate settings values.
    ///
    /// - `temperature` within 0.0..=2.0
    /// - `max_tokens` and `max_example_patterns` positive
    /// - template bodies non-empty
    /// - `default_template`, when set, names a configured template
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(PromptError::UserError(format!(
                "settings validation failed: temperature must be between 0.0 and 2.0 (found {})",
                self.temperature
            )));
        }

        if self.max_tokens == 0 {
            return Err(PromptError::UserError(
                "settings validation failed: max_tokens must be greater than 0".to_string(),
            ));
        }

        if self.max_example_patterns == 0 {
            return Err(PromptError::UserError(
                "settings validation failed: max_example_patterns must be greater than 0"
                    .to_string(),
            ));
        }

        for (name, body) in &self.prompt_templates {
            if body.trim().is_empty() {
                return Err(PromptError::UserError(format!(
                    "settings validation failed: prompt template '{}' is empty",
                    name
                )));
            }
        }

        if let Some(name) = &self.default_template
            && !self.prompt_templates.contains_key(name)
        {
            return Err(PromptError::UserError(format!(
                "settings validation failed: default_template '{}' is not defined in prompt_templates",
                name
            )));
        }

        Ok(())
    }

    /// Apply `MODEL_NAME`, `TEMPERATURE` and `LOG_LEVEL` from the environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(model) = std::env::var(ENV_MODEL_NAME)
            && !model.trim().is_empty()
        {
            debug!(model = %model, "model name overridden from environment");
            self.model_name = model;
        }

        if let Ok(raw) = std::env::var(ENV_TEMPERATURE) {
            self.temperature = raw.trim().parse().map_err(|_| {
                PromptError::UserError(format!(
                    "{} must be a number (found '{}')",
                    ENV_TEMPERATURE, raw
                ))
            })?;
        }

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL)
            && !level.trim().is_empty()
        {
            self.log_level = level.to_lowercase();
        }

        self.validate()
    }

    /// Look up a custom template body by name.
    pub fn template(&self, name: &str) -> Result<&str> {
        self.prompt_templates
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| {
                let known: Vec<&str> = self.prompt_templates.keys().map(String::as_str).collect();
                PromptError::UserError(format!(
                    "unknown prompt template '{}' (configured: {})",
                    name,
                    if known.is_empty() {
                        "none".to_string()
                    } else {
                        known.join(", ")
                    }
                ))
            })
    }
}
