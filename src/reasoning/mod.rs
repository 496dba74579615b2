//! Sketch-of-Thought reasoning prompts.
//!
//! - **Paradigm**: the reasoning styles and the keyword-based selector
//! - **World**: the agent's observed state, rendered into prompts
//! - **Prompts**: one prompt body per paradigm
//!
//! Selection is a cheap lexical heuristic over the task text. The chosen
//! paradigm decides which body the task and world state are substituted into.

mod paradigm;
mod prompts;
mod world;

pub use paradigm::{Domain, Paradigm, Selection, select_paradigm};
pub use prompts::paradigm_prompt;
pub use world::WorldModel;
