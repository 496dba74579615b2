//! Variable substitution for prompt bodies.
//!
//! Two renderers share one tokenizer:
//!
//! - [`render_template`] is strict. Undefined variables and malformed braces
//!   are errors. It is used for user-supplied templates so a misspelled slot
//!   name is reported instead of silently vanishing.
//! - [`render_lenient`] is total. Undefined variables render as the empty
//!   string and malformed braces are copied through literally. Every built-in
//!   body goes through this path.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name` (surrounding whitespace is trimmed)
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`

use std::collections::HashMap;
use std::fmt;

/// Error type for strict template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the opening `{`.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// Byte offset of the unmatched `{`.
        position: usize,
    },
    /// An empty variable name was found (`{}`).
    EmptyVariableName {
        /// Byte offset of the empty placeholder.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty variable name '{{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Char(char),
    Var { name: &'a str, position: usize },
    Empty { position: usize, raw: &'a str },
    Unclosed { position: usize, rest: &'a str },
}

fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    tokens.push(Token::Char('{'));
                    continue;
                }

                let mut close = None;
                for (i, c) in chars.by_ref() {
                    if c == '}' {
                        close = Some(i);
                        break;
                    }
                }

                match close {
                    Some(end) => {
                        let name = template[pos + 1..end].trim();
                        if name.is_empty() {
                            tokens.push(Token::Empty {
                                position: pos,
                                raw: &template[pos..=end],
                            });
                        } else {
                            tokens.push(Token::Var {
                                name,
                                position: pos,
                            });
                        }
                    }
                    None => tokens.push(Token::Unclosed {
                        position: pos,
                        rest: &template[pos..],
                    }),
                }
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` is literal.
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                tokens.push(Token::Char('}'));
            }
            _ => tokens.push(Token::Char(ch)),
        }
    }

    tokens
}

/// Render a template string, failing on any undefined variable or brace error.
///
/// # Examples
///
/// ```
/// use promptgen::template::{render_template, vars};
///
/// let vars = vars([("agent", "Helper-AI"), ("level", "Advanced")]);
/// let result = render_template("{agent} runs at {level} authority.", &vars).unwrap();
/// assert_eq!(result, "Helper-AI runs at Advanced authority.");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    for token in tokenize(template) {
        match token {
            Token::Char(c) => result.push(c),
            Token::Var { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
            Token::Empty { position, .. } => {
                return Err(TemplateError::EmptyVariableName { position });
            }
            Token::Unclosed { position, .. } => {
                return Err(TemplateError::UnmatchedBrace { position });
            }
        }
    }

    Ok(result)
}

/// Render a template string without ever failing.
///
/// Undefined variables become empty strings; `{}` (also with only
/// whitespace inside) and an unclosed `{` are emitted as written.
///
/// ```
/// use promptgen::template::{render_lenient, vars};
///
/// let vars = vars([("name", "Ops-AI")]);
/// assert_eq!(render_lenient("[{name}] [{missing}]", &vars), "[Ops-AI] []");
/// ```
pub fn render_lenient(template: &str, variables: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());

    for token in tokenize(template) {
        match token {
            Token::Char(c) => result.push(c),
            Token::Var { name, .. } => {
                if let Some(value) = variables.get(name) {
                    result.push_str(value);
                }
            }
            Token::Empty { raw, .. } => result.push_str(raw),
            Token::Unclosed { rest, .. } => {
                result.push_str(rest);
                break;
            }
        }
    }

    result
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
