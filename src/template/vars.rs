//! Conversion of a configuration record into template variables.

use crate::record::ConfigurationRecord;
use std::collections::HashMap;

/// Every variable name produced by [`ConfigurationRecord::to_template_vars`].
///
/// Custom templates may reference any of these.
pub const VARIABLE_NAMES: [&str; 22] = [
    "agent_name",
    "authority_level",
    "context",
    "response_format",
    "domain_context",
    "user_indicators",
    "planning_parameters",
    "quality_metrics",
    "delivery_elements",
    "ambiguity_strategy",
    "conflict_resolution",
    "incompleteness_handling",
    "multi_part_strategy",
    "confidence_high",
    "confidence_mid",
    "mid_confidence_action",
    "low_confidence_action",
    "feedback_sources",
    "meta_capabilities",
    "example_patterns",
    "sample_instruction",
    "first_instruction",
];

impl ConfigurationRecord {
    /// Convert the record to template variables.
    ///
    /// Thresholds render as plain decimal integers, unvalidated. The api key
    /// is intentionally absent.
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        let text = |s: &String| s.clone();

        let pairs = [
            ("agent_name", text(&self.agent_name)),
            ("authority_level", self.authority_level.to_string()),
            ("context", text(&self.context)),
            ("response_format", text(&self.response_format)),
            ("domain_context", text(&self.domain_context)),
            ("user_indicators", text(&self.user_indicators)),
            ("planning_parameters", text(&self.planning_parameters)),
            ("quality_metrics", text(&self.quality_metrics)),
            ("delivery_elements", text(&self.delivery_elements)),
            ("ambiguity_strategy", text(&self.ambiguity_strategy)),
            ("conflict_resolution", text(&self.conflict_resolution)),
            ("incompleteness_handling", text(&self.incompleteness_handling)),
            ("multi_part_strategy", text(&self.multi_part_strategy)),
            ("confidence_high", self.confidence_thresholds.high.to_string()),
            ("confidence_mid", self.confidence_thresholds.mid.to_string()),
            ("mid_confidence_action", text(&self.mid_confidence_action)),
            ("low_confidence_action", text(&self.low_confidence_action)),
            ("feedback_sources", text(&self.feedback_sources)),
            ("meta_capabilities", text(&self.meta_capabilities)),
            ("example_patterns", format_example_patterns(&self.example_patterns)),
            ("sample_instruction", text(&self.sample_instruction)),
            ("first_instruction", text(&self.first_instruction)),
        ];

        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

/// Render patterns as a dense numbered list, skipping empty entries.
///
/// `["", "Do X", "", "Do Y"]` becomes `"1. Do X\n2. Do Y"`.
pub fn format_example_patterns(patterns: &[String]) -> String {
    patterns
        .iter()
        .filter(|p| !p.is_empty())
        .enumerate()
        .map(|(i, p)| format!("{}. {}", i + 1, p))
        .collect::<Vec<_>>()
        .join("\n")
}
