//! Implementation of the `promptgen show` command.
//!
//! Prints a preset's record as YAML with the API key masked.

use crate::cli::ShowArgs;
use promptgen::catalog::Catalog;
use promptgen::error::{PromptError, Result};

/// Render the named preset as a commented YAML document.
pub fn render_preset(catalog: &Catalog, name: &str) -> Result<String> {
    let entry = catalog.get(name).ok_or_else(|| {
        PromptError::UserError(format!(
            "preset '{}' not found.\n\n\
             Use `promptgen list` to see all presets, or `promptgen find <text>` to search.",
            name
        ))
    })?;

    let yaml = entry.config.masked().to_yaml()?;
    Ok(format!("# {}\n{}", entry.description, yaml))
}

/// Execute the `promptgen show` command.
pub fn cmd_show(catalog: &Catalog, args: ShowArgs) -> Result<()> {
    print!("{}", render_preset(catalog, &args.preset)?);
    Ok(())
}
