//! Prompt template subsystem.
//!
//! - **Engine**: `{variable}` substitution, strict and lenient
//! - **Vars**: configuration record to template variables
//! - **Body**: the fixed system-prompt template
//! - **Generator**: record in, prompt text out
//!
//! Use `{{` to escape and render a literal `{`.

mod body;
mod engine;
mod generator;
mod vars;

pub use body::{SECTION_HEADERS, SYSTEM_PROMPT};
pub use engine::{TemplateError, render_lenient, render_template, vars};
pub use generator::{generate_prompt, generate_with_template};
pub use vars::{VARIABLE_NAMES, format_example_patterns};
