//! promptgen: structured prompt assembly for instruction-following LLM agents.
//!
//! A [`ConfigurationRecord`](record::ConfigurationRecord) is substituted into
//! a fixed multi-section template to produce a system prompt. A static preset
//! [`Catalog`](catalog::Catalog) offers pre-filled records, selected by name or
//! by case-insensitive substring, through a [`Session`](session::Session).

pub mod catalog;
pub mod completion;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod instruction;
pub mod logging;
pub mod reasoning;
pub mod record;
pub mod session;
pub mod settings;
pub mod template;
