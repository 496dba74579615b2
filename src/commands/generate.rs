//! Implementation of the `promptgen generate` command.
//!
//! Builds the active record from (in order) a preset, a record file,
//! `--set` overrides and extra `--pattern`s, then renders it with either the
//! built-in system prompt or a named template from the settings file.

use super::split_assignment;
use crate::cli::GenerateArgs;
use promptgen::catalog::Catalog;
use promptgen::error::Result;
use promptgen::fs::atomic_write;
use promptgen::record::ConfigurationRecord;
use promptgen::session::Session;
use promptgen::settings::Settings;
use tracing::{debug, info};

/// Assemble the record and render the prompt without printing anything.
pub fn build_prompt(catalog: &Catalog, settings: &Settings, args: &GenerateArgs) -> Result<String> {
    let mut session = Session::new(catalog);

    if let Some(name) = &args.preset {
        session.select_preset(name)?;
    }
    if let Some(query) = &args.query {
        session.quick_select(query)?;
    }
    if let Some(path) = &args.record {
        debug!(path = %path.display(), "loading record file");
        session.select(ConfigurationRecord::load(path)?);
    }

    for raw in &args.set {
        let (field, value) = split_assignment(raw, "--set")?;
        session.set_field(field, value)?;
    }
    session
        .active_mut()
        .example_patterns
        .extend(args.patterns.iter().cloned());

    if !args.no_validate {
        session.active().validate(settings.max_example_patterns)?;
    }

    let template = args
        .template
        .as_deref()
        .or(settings.default_template.as_deref());

    match template {
        Some(name) => {
            debug!(template = name, "rendering custom template");
            let body = settings.template(name)?;
            Ok(session.generate_with(body)?)
        }
        None => Ok(session.generate()),
    }
}

/// Execute the `promptgen generate` command.
pub fn cmd_generate(catalog: &Catalog, settings: &Settings, args: GenerateArgs) -> Result<()> {
    let prompt = build_prompt(catalog, settings, &args)?;

    match &args.output {
        Some(path) => {
            atomic_write(path, &prompt)?;
            info!(path = %path.display(), bytes = prompt.len(), "wrote prompt");
            println!("Wrote prompt to {}", path.display());
        }
        None => print!("{}", prompt),
    }

    Ok(())
}
