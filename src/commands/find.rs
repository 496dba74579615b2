//! Implementation of the `promptgen find` command.

use crate::cli::FindArgs;
use promptgen::catalog::Catalog;
use promptgen::error::{PromptError, Result};

/// Describe the first preset matching `query`.
pub fn render_match(catalog: &Catalog, query: &str) -> Result<String> {
    let entry = catalog
        .find_by_text(query)
        .ok_or_else(|| PromptError::LookupMiss(query.to_string()))?;

    let mut out = format!("{}\n", entry.description);
    out.push_str(&format!("  Agent:      {}\n", entry.config.agent_name));
    out.push_str(&format!("  Authority:  {}\n", entry.config.authority_level));
    if !entry.config.sample_instruction.is_empty() {
        out.push_str(&format!("  Sample:     {}\n", entry.config.sample_instruction));
    }
    Ok(out)
}

/// Execute the `promptgen find` command.
pub fn cmd_find(catalog: &Catalog, args: FindArgs) -> Result<()> {
    print!("{}", render_match(catalog, &args.query)?);
    Ok(())
}
