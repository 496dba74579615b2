//! ConfigurationRecord struct definition.

use super::types::{AuthorityLevel, ConfidenceThresholds};
use serde::{Deserialize, Serialize};

/// Every named value that can appear in a generated system prompt.
///
/// Serialized with camelCase keys (`agentName`, `confidenceThresholds`, ...).
/// Unknown keys are ignored and missing keys take their defaults, so a
/// partial file is always a valid record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationRecord {
    // =========================================================================
    // Identity
    // =========================================================================
    pub agent_name: String,

    /// Credential for the completion service. Never rendered into a prompt.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,

    // =========================================================================
    // Policy
    // =========================================================================
    pub authority_level: AuthorityLevel,

    // =========================================================================
    // Free-text parameters
    // =========================================================================
    pub context: String,
    pub response_format: String,
    pub domain_context: String,
    pub user_indicators: String,
    pub planning_parameters: String,
    pub quality_metrics: String,
    pub delivery_elements: String,

    // =========================================================================
    // Strategies
    // =========================================================================
    pub ambiguity_strategy: String,
    pub conflict_resolution: String,
    pub incompleteness_handling: String,
    pub multi_part_strategy: String,
    pub mid_confidence_action: String,
    pub low_confidence_action: String,
    pub feedback_sources: String,
    pub meta_capabilities: String,

    // =========================================================================
    // Confidence and examples
    // =========================================================================
    pub confidence_thresholds: ConfidenceThresholds,

    /// Ordered instruction patterns; blank entries are skipped when rendered.
    pub example_patterns: Vec<String>,

    pub sample_instruction: String,
    pub first_instruction: String,
}
