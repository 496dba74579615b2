//! Catalog type and lookup operations.

use super::presets::builtin_entries;
use crate::error::{PromptError, Result};
use crate::record::ConfigurationRecord;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    entries: builtin_entries(),
});

/// A named configuration offered for quick selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetEntry {
    /// Display name, unique within its catalog.
    pub description: String,
    pub config: ConfigurationRecord,
}

impl PresetEntry {
    pub fn new(description: impl Into<String>, config: ConfigurationRecord) -> Self {
        Self {
            description: description.into(),
            config,
        }
    }
}

/// An immutable, ordered collection of presets.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<PresetEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate descriptions (compared ignoring case).
    pub fn new(entries: Vec<PresetEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.description.to_lowercase()) {
                return Err(PromptError::UserError(format!(
                    "duplicate preset description '{}'",
                    entry.description
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All entries in display order.
    pub fn list(&self) -> &[PresetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose description contains `query`, ignoring case.
    ///
    /// Plain substring containment: no scoring and no typo tolerance. Ties go
    /// to the entry that comes first in the catalog.
    pub fn find_by_text(&self, query: &str) -> Option<&PresetEntry> {
        let needle = query.to_lowercase();
        let found = self
            .entries
            .iter()
            .find(|entry| entry.description.to_lowercase().contains(&needle));

        match found {
            Some(entry) => debug!(query, preset = %entry.description, "preset lookup matched"),
            None => debug!(query, "preset lookup found no match"),
        }
        found
    }

    /// Entry whose description equals `description`, ignoring case.
    pub fn get(&self, description: &str) -> Option<&PresetEntry> {
        let wanted = description.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.description.to_lowercase() == wanted)
    }
}
