//! Prompt bodies for each reasoning paradigm.

use super::paradigm::Paradigm;
use super::world::WorldModel;
use crate::template::{render_lenient, vars};

const CONCEPTUAL_CHAINING: &str = r#"You are an AI reasoning using the Sketch-of-Thought (SoT) Conceptual Chaining paradigm.

In Conceptual Chaining, you link key concepts with minimal words, using -> arrows.
For example: Seoul -> South Korea -> Won (Currency)

Current world state:
{world_state}

Task: {task}

Think step by step, but use concise concept chains. Respond in this format:

<thinking>
[Your condensed chain of concepts, using -> arrows]
</thinking>

<answer>
[Your final answer/explanation based on the conceptual chain]
</answer>
"#;

const CHUNKED_SYMBOLISM: &str = r#"You are an AI reasoning using the Sketch-of-Thought (SoT) Chunked Symbolism paradigm.

In Chunked Symbolism, you compress quantitative reasoning into symbols and equations.
For example: v_f = v_i + a·t = 15 m/s + 2.5 m/s² · 10 s = 40 m/s

Current world state:
{world_state}

Task: {task}

Think step by step using equations and symbols. Respond in this format:

<thinking>
[Your symbolic calculations and equations]
</thinking>

<answer>
[Your final answer/explanation based on the calculations]
</answer>
"#;

const EXPERT_LEXICON: &str = r#"You are an AI reasoning using the Sketch-of-Thought (SoT) Expert Lexicon paradigm.

In Expert Lexicon, you use domain-specific shorthand and abbreviations.
For example: Pt w/ STEMI -> MONA (Morphine, O2, Nitrates, Aspirin)

Current world state:
{world_state}

Task: {task}

Think using domain expert shorthand. Respond in this format:

<thinking>
[Your expert shorthand reasoning]
</thinking>

<answer>
[Your final answer/explanation based on the expert reasoning]
</answer>
"#;

const DEFAULT: &str = r#"You are an AI assistant tasked with answering a question or solving a problem.

Current world state:
{world_state}

Task: {task}

Think step by step, then provide your answer.

<thinking>
[Your step-by-step reasoning]
</thinking>

<answer>
[Your final answer/explanation]
</answer>
"#;

fn body(paradigm: Paradigm) -> &'static str {
    match paradigm {
        Paradigm::ConceptualChaining => CONCEPTUAL_CHAINING,
        Paradigm::ChunkedSymbolism => CHUNKED_SYMBOLISM,
        Paradigm::ExpertLexicon => EXPERT_LEXICON,
        Paradigm::Default => DEFAULT,
    }
}

/// Render the prompt for `paradigm` with `task` and the current world state.
pub fn paradigm_prompt(paradigm: Paradigm, task: &str, world: &WorldModel) -> String {
    let vars = vars([("task", task.to_string()), ("world_state", world.render())]);
    render_lenient(body(paradigm), &vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldModel {
        let mut world = WorldModel::new();
        world.insert("temperature", 22.5);
        world
    }

    #[test]
    fn test_each_paradigm_has_distinct_body() {
        let prompts: Vec<String> = Paradigm::ALL
            .into_iter()
            .map(|p| paradigm_prompt(p, "Task text", &world()))
            .collect();
        for (i, a) in prompts.iter().enumerate() {
            for b in &prompts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_prompt_includes_task_and_world() {
        let prompt = paradigm_prompt(Paradigm::ChunkedSymbolism, "What is 3 * 4?", &world());
        assert!(prompt.contains("Chunked Symbolism paradigm"));
        assert!(prompt.contains("Current world state:\ntemperature: 22.5\n\n\nTask: What is 3 * 4?"));
        assert!(prompt.contains("<thinking>"));
        assert!(prompt.contains("</answer>"));
    }

    #[test]
    fn test_empty_world_and_braces_in_task() {
        for paradigm in Paradigm::ALL {
            let prompt = paradigm_prompt(paradigm, "Explain {braces}", &WorldModel::new());
            assert!(
                prompt.contains("Current world state:\n\n\nTask: Explain {braces}\n"),
                "{paradigm}: {prompt}"
            );
        }
    }
}
