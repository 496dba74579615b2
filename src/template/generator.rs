//! Prompt generation from a configuration record.

use super::body::SYSTEM_PROMPT;
use super::engine::{TemplateError, render_lenient, render_template};
use crate::record::ConfigurationRecord;
use tracing::debug;

/// Substitute `record` into the built-in system-prompt body.
///
/// Total and deterministic: the same record always yields the same string,
/// and empty fields render as empty text.
pub fn generate_prompt(record: &ConfigurationRecord) -> String {
    let vars = record.to_template_vars();
    let prompt = render_lenient(SYSTEM_PROMPT, &vars);
    debug!(agent = %record.agent_name, bytes = prompt.len(), "generated system prompt");
    prompt
}

/// Substitute `record` into a caller-supplied template.
///
/// Rendering is strict so that a misspelled slot is reported rather than
/// dropped. See [`VARIABLE_NAMES`](super::VARIABLE_NAMES) for valid slots.
pub fn generate_with_template(
    record: &ConfigurationRecord,
    template: &str,
) -> Result<String, TemplateError> {
    let vars = record.to_template_vars();
    let prompt = render_template(template, &vars)?;
    debug!(agent = %record.agent_name, bytes = prompt.len(), "generated prompt from custom template");
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ConfidenceThresholds;
    use crate::template::SECTION_HEADERS;

    fn sample_record() -> ConfigurationRecord {
        ConfigurationRecord {
            agent_name: "Analyst-AI".to_string(),
            context: "Quarterly reporting".to_string(),
            mid_confidence_action: "Ask one clarifying question.".to_string(),
            low_confidence_action: "Decline and explain.".to_string(),
            example_patterns: vec![
                String::new(),
                "Do X".to_string(),
                String::new(),
                "Do Y".to_string(),
            ],
            sample_instruction: "Summarize Q3 revenue".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_deterministic() {
        let record = sample_record();
        assert_eq!(generate_prompt(&record), generate_prompt(&record));
    }

    #[test]
    fn test_sections_in_order() {
        let prompt = generate_prompt(&ConfigurationRecord::default());
        let mut last = 0;
        for header in SECTION_HEADERS {
            let pos = prompt[last..]
                .find(header)
                .unwrap_or_else(|| panic!("section {} missing or out of order", header));
            last += pos + header.len();
        }
    }

    #[test]
    fn test_empty_fields_leave_no_artifacts() {
        let prompt = generate_prompt(&ConfigurationRecord::default());
        for artifact in ["undefined", "null", "None", "{", "}"] {
            assert!(!prompt.contains(artifact), "found {:?} in prompt", artifact);
        }
        assert!(prompt.contains("- Agent name: \n"));
        assert!(prompt.contains("- Domain context: \n"));
    }

    #[test]
    fn test_example_patterns_rendered_densely() {
        let prompt = generate_prompt(&sample_record());
        assert!(prompt.contains("# EXAMPLE INSTRUCTION PATTERNS\n1. Do X\n2. Do Y\n\n"));
        assert!(!prompt.contains("3. Do"));
    }

    #[test]
    fn test_threshold_slots() {
        let record = ConfigurationRecord {
            confidence_thresholds: ConfidenceThresholds { high: 90, mid: 70 },
            ..sample_record()
        };
        let prompt = generate_prompt(&record);

        assert_eq!(prompt.matches("between 70% and 90%").count(), 1);
        assert_eq!(prompt.matches("(90% and above)").count(), 1);
        assert_eq!(prompt.matches("(below 70%)").count(), 1);
        // The high value appears at its own slot and inside the medium band only.
        assert_eq!(prompt.matches("90%").count(), 2);
    }

    #[test]
    fn test_out_of_range_thresholds_render_verbatim() {
        let record = ConfigurationRecord {
            confidence_thresholds: ConfidenceThresholds { high: 40, mid: 75 },
            ..Default::default()
        };
        let prompt = generate_prompt(&record);
        assert!(prompt.contains("between 75% and 40%"));
    }

    #[test]
    fn test_field_values_verbatim() {
        let prompt = generate_prompt(&sample_record());
        assert!(prompt.contains("- Agent name: Analyst-AI\n"));
        assert!(prompt.contains("- Operating context: Quarterly reporting\n"));
        assert!(prompt.contains("Sample instruction: \"Summarize Q3 revenue\""));
        assert!(prompt.contains("(below 70%): Decline and explain."));
    }

    #[test]
    fn test_braces_in_values_are_not_expanded() {
        let record = ConfigurationRecord {
            response_format: "JSON like {\"answer\": {agent_name}}".to_string(),
            agent_name: "Inner".to_string(),
            ..Default::default()
        };
        let prompt = generate_prompt(&record);
        assert!(prompt.contains("JSON like {\"answer\": {agent_name}}"));
    }

    #[test]
    fn test_api_key_never_rendered() {
        let record = ConfigurationRecord {
            api_key: "sk-live-123".to_string(),
            ..sample_record()
        };
        assert!(!generate_prompt(&record).contains("sk-live-123"));
    }

    #[test]
    fn test_custom_template() {
        let record = sample_record();
        let out = generate_with_template(&record, "{agent_name}: {sample_instruction}").unwrap();
        assert_eq!(out, "Analyst-AI: Summarize Q3 revenue");
    }

    #[test]
    fn test_custom_template_reports_typos() {
        let record = sample_record();
        let err = generate_with_template(&record, "{agentname}").unwrap_err();
        assert!(matches!(err, TemplateError::UndefinedVariable { ref name, .. } if name == "agentname"));
    }
}
