//! Instruction-following support.
//!
//! - **Prompts**: the analyze / execute / verify prompt trio
//! - **Set**: a priority-ordered instruction queue with dependencies

mod prompts;
mod set;

pub use prompts::{analysis_prompt, execution_prompt, verification_prompt};
pub use set::{Instruction, InstructionSet};
