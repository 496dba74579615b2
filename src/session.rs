//! The active configuration owned by one user session.
//!
//! A session borrows the catalog it selects from and exclusively owns the
//! single active [`ConfigurationRecord`]. Nothing here is shared or
//! persisted; a new session always starts from defaults.

use crate::catalog::{Catalog, PresetEntry};
use crate::completion::CompletionRequest;
use crate::error::{PromptError, Result};
use crate::record::ConfigurationRecord;
use crate::settings::Settings;
use crate::template::{TemplateError, generate_prompt, generate_with_template};
use tracing::info;

#[derive(Debug)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    active: ConfigurationRecord,
}

impl<'a> Session<'a> {
    /// Start a session with a default record.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            active: ConfigurationRecord::default(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn active(&self) -> &ConfigurationRecord {
        &self.active
    }

    /// Mutable access for field-by-field editing.
    pub fn active_mut(&mut self) -> &mut ConfigurationRecord {
        &mut self.active
    }

    /// Replace the active record wholesale.
    pub fn select(&mut self, config: ConfigurationRecord) {
        self.active = config;
    }

    /// Select the preset whose description equals `description` (ignoring case).
    pub fn select_preset(&mut self, description: &str) -> Result<&'a PresetEntry> {
        let entry = self.catalog.get(description).ok_or_else(|| {
            PromptError::UserError(format!(
                "unknown preset '{}'.\n\nUse `promptgen list` to see available presets.",
                description
            ))
        })?;
        self.select(entry.config.clone());
        info!(preset = %entry.description, "selected preset");
        Ok(entry)
    }

    /// Select the first preset whose description contains `query`.
    ///
    /// On a miss the active record is left untouched and `LookupMiss` is returned.
    pub fn quick_select(&mut self, query: &str) -> Result<&'a PresetEntry> {
        let entry = self
            .catalog
            .find_by_text(query)
            .ok_or_else(|| PromptError::LookupMiss(query.to_string()))?;
        self.select(entry.config.clone());
        info!(query, preset = %entry.description, "quick-selected preset");
        Ok(entry)
    }

    /// Replace one field of the active record.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.active.set_field(name, value)
    }

    /// Generate the system prompt from the active record.
    pub fn generate(&self) -> String {
        generate_prompt(&self.active)
    }

    /// Generate from a caller-supplied template instead of the built-in body.
    pub fn generate_with(&self, template: &str) -> std::result::Result<String, TemplateError> {
        generate_with_template(&self.active, template)
    }

    /// Package the generated prompt for a completion service.
    pub fn completion_request(&self, settings: &Settings) -> CompletionRequest {
        CompletionRequest::from_settings(self.generate(), settings)
    }
}
