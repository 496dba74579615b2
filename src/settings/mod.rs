//! Application settings for promptgen.
//!
//! Settings live in an optional YAML file (`--config <file>`). Parsing is
//! forward compatible (unknown fields are ignored), every field has a
//! default, and values are validated after parsing. A few values can be
//! overridden from the environment.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::Settings;
