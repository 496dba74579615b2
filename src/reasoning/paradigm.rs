//! Reasoning paradigms and keyword-driven selection.

use crate::error::PromptError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Substrings suggesting quantitative work. Operators are matched anywhere,
/// so a hyphenated word also counts.
const MATH_INDICATORS: &[&str] = &[
    "calculate",
    "compute",
    "solve",
    "equation",
    "formula",
    "how many",
    "what is the value",
    "percent",
    "average",
    "+",
    "-",
    "*",
    "/",
    "=",
    ">",
    "<",
    "≤",
    "≥",
];

const MEDICAL_INDICATORS: &[&str] = &["patient", "diagnosis", "treatment", "symptom", "disease"];
const PROGRAMMING_INDICATORS: &[&str] = &["code", "function", "class", "algorithm", "variable"];
const FINANCE_INDICATORS: &[&str] = &["stock", "investment", "portfolio", "return", "market"];

const CONCEPTUAL_INDICATORS: &[&str] = &[
    "relate",
    "connect",
    "compare",
    "contrast",
    "difference",
    "similarity",
    "causation",
    "impact",
    "effect",
    "influence",
    "why",
    "how does",
    "what causes",
    "relationship",
];

/// A reasoning style, each with its own prompt body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paradigm {
    /// Link key concepts with minimal words and `->` arrows.
    ConceptualChaining,
    /// Compress quantitative reasoning into equations and symbols.
    ChunkedSymbolism,
    /// Reason in domain shorthand and abbreviations.
    ExpertLexicon,
    /// Plain step-by-step reasoning. Never auto-selected.
    Default,
}

impl Paradigm {
    pub const ALL: [Paradigm; 4] = [
        Paradigm::ConceptualChaining,
        Paradigm::ChunkedSymbolism,
        Paradigm::ExpertLexicon,
        Paradigm::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Paradigm::ConceptualChaining => "conceptual_chaining",
            Paradigm::ChunkedSymbolism => "chunked_symbolism",
            Paradigm::ExpertLexicon => "expert_lexicon",
            Paradigm::Default => "default",
        }
    }

}

/// Paradigms parse from their snake_case names.
impl FromStr for Paradigm {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| {
                PromptError::UserError(format!(
                    "unknown paradigm '{}' (expected one of: {})",
                    s,
                    Self::ALL.map(|p| p.as_str()).join(", ")
                ))
            })
    }
}

impl fmt::Display for Paradigm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specialist domain detected for the expert-lexicon paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Medical,
    Programming,
    Finance,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Medical => "medical",
            Domain::Programming => "programming",
            Domain::Finance => "finance",
        }
    }

    fn indicators(&self) -> &'static [&'static str] {
        match self {
            Domain::Medical => MEDICAL_INDICATORS,
            Domain::Programming => PROGRAMMING_INDICATORS,
            Domain::Finance => FINANCE_INDICATORS,
        }
    }
}

/// Outcome of [`select_paradigm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub paradigm: Paradigm,
    /// Set only when `paradigm` is `ExpertLexicon`.
    pub domain: Option<Domain>,
}

fn mentions_any(text: &str, indicators: &[&str]) -> bool {
    indicators.iter().any(|indicator| text.contains(indicator))
}

/// Choose a paradigm for `task`.
///
/// Checks run in priority order on the lowercased task: math indicators pick
/// chunked symbolism; then medical, programming and finance keywords pick the
/// expert lexicon; everything else, relational wording included, falls back
/// to conceptual chaining.
pub fn select_paradigm(task: &str) -> Selection {
    let text = task.to_lowercase();
    let preview: String = task.chars().take(50).collect();

    if mentions_any(&text, MATH_INDICATORS) {
        debug!(task = %preview, "selected chunked_symbolism");
        return Selection {
            paradigm: Paradigm::ChunkedSymbolism,
            domain: None,
        };
    }

    for domain in [Domain::Medical, Domain::Programming, Domain::Finance] {
        if mentions_any(&text, domain.indicators()) {
            debug!(task = %preview, domain = domain.as_str(), "selected expert_lexicon");
            return Selection {
                paradigm: Paradigm::ExpertLexicon,
                domain: Some(domain),
            };
        }
    }

    if mentions_any(&text, CONCEPTUAL_INDICATORS) {
        debug!(task = %preview, "selected conceptual_chaining");
    } else {
        debug!(task = %preview, "no indicators matched, using conceptual_chaining");
    }

    Selection {
        paradigm: Paradigm::ConceptualChaining,
        domain: None,
    }
}
