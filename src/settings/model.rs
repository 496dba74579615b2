//! Settings struct definition and defaults.

use crate::record::MAX_EXAMPLE_PATTERNS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings for prompt generation and the completion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // =========================================================================
    // Completion service
    // =========================================================================
    /// Model name passed to the completion service (default: "gpt-4").
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Sampling temperature, 0.0 to 2.0 (default: 0.7).
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens the service may generate (default: 1024).
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Log filter used when neither `RUST_LOG` nor `-v` is given (default: "info").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    // =========================================================================
    // Records and templates
    // =========================================================================
    /// Upper bound on example patterns accepted by record validation.
    #[serde(default = "default_max_example_patterns")]
    pub max_example_patterns: usize,

    /// Template used by `generate` when `--template` is not given.
    /// `None` means the built-in system prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_template: Option<String>,

    /// Custom prompt templates keyed by name.
    #[serde(default)]
    pub prompt_templates: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            log_level: default_log_level(),
            max_example_patterns: default_max_example_patterns(),
            default_template: None,
            prompt_templates: BTreeMap::new(),
        }
    }
}

fn default_model_name() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_example_patterns() -> usize {
    MAX_EXAMPLE_PATTERNS
}
