//! Prompts for the three instruction-following stages.
//!
//! The analysis stage asks for a JSON breakdown; later stages embed that
//! analysis, pretty-printed, next to the original instruction.

use crate::template::{render_lenient, vars};
use serde_json::Value;

const ANALYSIS: &str = r#"You are an AI assistant dedicated to accurately following instructions.
Your task is to analyze the following instruction:

INSTRUCTION: {instruction}

Break down this instruction into:
1. Primary objective(s)
2. Constraints or requirements
3. Any specific methodologies to follow
4. Expected output format

Respond in JSON format with these components.
"#;

const EXECUTION: &str = r#"You are an AI assistant following instructions precisely.

INSTRUCTION: {instruction}

INSTRUCTION ANALYSIS: {analysis}

Based on this analysis, execute the instruction exactly as specified.
Ensure your response adheres to all constraints and output formats.
"#;

const VERIFICATION: &str = r#"You are an AI assistant verifying instruction execution.

ORIGINAL INSTRUCTION: {instruction}
INSTRUCTION ANALYSIS: {analysis}
GENERATED RESPONSE: {response}

Verify if the response correctly follows the instruction.
Check against each component of the analysis.
If there are discrepancies, explain them.

Respond in JSON format with a verification result (true/false) and explanation.
"#;

fn pretty(analysis: &Value) -> String {
    serde_json::to_string_pretty(analysis).unwrap_or_else(|_| analysis.to_string())
}

/// Stage 1: ask for a structured breakdown of `instruction`.
pub fn analysis_prompt(instruction: &str) -> String {
    render_lenient(ANALYSIS, &vars([("instruction", instruction)]))
}

/// Stage 2: ask for execution guided by the analysis.
pub fn execution_prompt(instruction: &str, analysis: &Value) -> String {
    render_lenient(
        EXECUTION,
        &vars([
            ("instruction", instruction.to_string()),
            ("analysis", pretty(analysis)),
        ]),
    )
}

/// Stage 3: ask whether `response` satisfies the instruction and its analysis.
pub fn verification_prompt(instruction: &str, analysis: &Value, response: &str) -> String {
    render_lenient(
        VERIFICATION,
        &vars([
            ("instruction", instruction.to_string()),
            ("analysis", pretty(analysis)),
            ("response", response.to_string()),
        ]),
    )
}
