//! Command implementations for promptgen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command reads from the built-in catalog or the
//! loaded settings; none of them keep state between runs.

mod find;
mod generate;
mod instruct;
mod list;
mod paradigm;
mod show;

use crate::cli::Command;
use promptgen::catalog::Catalog;
use promptgen::error::{PromptError, Result};
use promptgen::settings::Settings;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, settings: &Settings) -> Result<()> {
    let catalog = Catalog::builtin();
    match command {
        Command::List => list::cmd_list(catalog),
        Command::Find(args) => find::cmd_find(catalog, args),
        Command::Show(args) => show::cmd_show(catalog, args),
        Command::Generate(args) => generate::cmd_generate(catalog, settings, args),
        Command::Paradigm(args) => paradigm::cmd_paradigm(args),
        Command::Instruct(args) => instruct::cmd_instruct(args),
    }
}

/// Split a `name=value` argument. The value may itself contain `=`.
pub(crate) fn split_assignment<'a>(raw: &'a str, flag: &str) -> Result<(&'a str, &'a str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(PromptError::UserError(format!(
            "invalid {} value '{}' (expected name=value)",
            flag, raw
        ))),
    }
}
