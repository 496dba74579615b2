//! Implementation of the `promptgen instruct` command.

use crate::cli::InstructArgs;
use promptgen::error::{PromptError, Result};
use promptgen::instruction::analysis_prompt;

/// Execute the `promptgen instruct` command.
pub fn cmd_instruct(args: InstructArgs) -> Result<()> {
    if args.instruction.trim().is_empty() {
        return Err(PromptError::UserError(
            "instruction must not be empty".to_string(),
        ));
    }
    print!("{}", analysis_prompt(&args.instruction));
    Ok(())
}
