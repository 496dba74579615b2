//! The configuration record that parameterizes a generated prompt.
//!
//! A record is created with defaults, edited field by field (each edit
//! replaces the whole value of one field), and read once when a prompt is
//! generated. Records can also be loaded from YAML or JSON using the same
//! camelCase field names the presets use.

mod model;
mod operations;
pub mod types;


pub use model::ConfigurationRecord;
pub use types::{AuthorityLevel, ConfidenceThresholds, MAX_EXAMPLE_PATTERNS};
