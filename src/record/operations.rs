//! Record loading, editing, and caller-side validation.

use super::model::ConfigurationRecord;
use super::types::{AuthorityLevel, ConfidenceThresholds};
use crate::error::{PromptError, Result};
use std::path::Path;

const MASK: &str = "********";

impl ConfigurationRecord {
    /// Load a record from a YAML or JSON file.
    ///
    /// Files ending in `.json` are parsed as JSON; everything else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read record file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse a record from YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct; treat it as all-defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse record YAML: {}", e)))
    }

    /// Parse a record from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PromptError::UserError(format!("failed to parse record JSON: {}", e)))
    }

    /// Serialize the record to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PromptError::UserError(format!("failed to serialize record: {}", e)))
    }

    /// A copy safe to display: a non-empty `api_key` is replaced with a mask.
    pub fn masked(&self) -> Self {
        let mut copy = self.clone();
        if !copy.api_key.is_empty() {
            copy.api_key = MASK.to_string();
        }
        copy
    }

    /// Replace one field's value by name.
    ///
    /// Names are matched ignoring case, `_` and `-`, so `agentName`,
    /// `agent_name` and `agent-name` all address the same field. The nested
    /// thresholds are addressed as `confidenceThresholds.high` / `.mid`
    /// (or `confidenceHigh` / `confidenceMid`). `examplePatterns` takes one
    /// pattern per line.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        let text = value.to_string();
        match key.as_str() {
            "agentname" => self.agent_name = text,
            "apikey" => self.api_key = text,
            "authoritylevel" => {
                self.authority_level = value.parse::<AuthorityLevel>()?;
            }
            "context" => self.context = text,
            "responseformat" => self.response_format = text,
            "domaincontext" => self.domain_context = text,
            "userindicators" => self.user_indicators = text,
            "planningparameters" => self.planning_parameters = text,
            "qualitymetrics" => self.quality_metrics = text,
            "deliveryelements" => self.delivery_elements = text,
            "ambiguitystrategy" => self.ambiguity_strategy = text,
            "conflictresolution" => self.conflict_resolution = text,
            "incompletenesshandling" => self.incompleteness_handling = text,
            "multipartstrategy" => self.multi_part_strategy = text,
            "midconfidenceaction" => self.mid_confidence_action = text,
            "lowconfidenceaction" => self.low_confidence_action = text,
            "feedbacksources" => self.feedback_sources = text,
            "metacapabilities" => self.meta_capabilities = text,
            "confidencethresholds.high" | "confidencehigh" => {
                self.confidence_thresholds.high = parse_percent(name, value)?;
            }
            "confidencethresholds.mid" | "confidencemid" => {
                self.confidence_thresholds.mid = parse_percent(name, value)?;
            }
            "examplepatterns" => {
                self.example_patterns = value.lines().map(str::to_string).collect();
            }
            "sampleinstruction" => self.sample_instruction = text,
            "firstinstruction" => self.first_instruction = text,
            _ => return Err(PromptError::UnknownField(name.to_string())),
        }

        Ok(())
    }

    /// Check the constraints the renderer deliberately ignores.
    ///
    /// - `0 <= mid <= high <= 100`
    /// - at most `max_patterns` example patterns
    pub fn validate(&self, max_patterns: usize) -> Result<()> {
        let ConfidenceThresholds { high, mid } = self.confidence_thresholds;

        if !(0..=100).contains(&high) || !(0..=100).contains(&mid) {
            return Err(PromptError::InvalidRecord(format!(
                "confidence thresholds must be within 0..=100 (high {}, mid {})",
                high, mid
            )));
        }

        if mid > high {
            return Err(PromptError::InvalidRecord(format!(
                "mid ({}) exceeds high ({})",
                mid, high
            )));
        }

        if self.example_patterns.len() > max_patterns {
            return Err(PromptError::InvalidRecord(format!(
                "{} example patterns given, at most {} allowed",
                self.example_patterns.len(),
                max_patterns
            )));
        }

        Ok(())
    }
}

fn parse_percent(field: &str, value: &str) -> Result<i32> {
    value.trim().trim_end_matches('%').parse().map_err(|_| {
        PromptError::UserError(format!(
            "field '{}' expects an integer percentage, got '{}'",
            field, value
        ))
    })
}
