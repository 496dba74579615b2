//! Value types embedded in a [`ConfigurationRecord`](super::ConfigurationRecord).

use crate::error::PromptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default upper bound on `examplePatterns` entries checked by `validate`.
pub const MAX_EXAMPLE_PATTERNS: usize = 5;

/// How much latitude the agent has when acting on instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AuthorityLevel {
    #[default]
    Basic,
    Intermediate,
    Advanced,
    Administrator,
}

impl AuthorityLevel {
    /// All levels in ascending order.
    pub const ALL: [AuthorityLevel; 4] = [
        AuthorityLevel::Basic,
        AuthorityLevel::Intermediate,
        AuthorityLevel::Advanced,
        AuthorityLevel::Administrator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorityLevel::Basic => "Basic",
            AuthorityLevel::Intermediate => "Intermediate",
            AuthorityLevel::Advanced => "Advanced",
            AuthorityLevel::Administrator => "Administrator",
        }
    }
}

/// Level names are matched ignoring case and surrounding whitespace.
impl FromStr for AuthorityLevel {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                PromptError::UserError(format!(
                    "invalid authority level '{}' (expected one of: {})",
                    s,
                    Self::ALL.map(|l| l.as_str()).join(", ")
                ))
            })
    }
}

impl fmt::Display for AuthorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage cut-offs for the confidence framework.
///
/// Intended to satisfy `0 <= mid <= high <= 100`. The prompt renderer does
/// not enforce this; see `ConfigurationRecord::validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    pub high: i32,
    pub mid: i32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self { high: 90, mid: 70 }
    }
}
