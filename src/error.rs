//! Error types for promptgen.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::completion::ServiceError;
use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for promptgen operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum PromptError {
    /// User provided invalid arguments or an unreadable/invalid file.
    #[error("{0}")]
    UserError(String),

    /// `set_field` was called with a name the record does not have.
    #[error("unknown record field '{0}'")]
    UnknownField(String),

    /// No preset description contains the query.
    #[error("no preset matches '{0}'")]
    LookupMiss(String),

    /// A custom template failed to render.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The record violates a constraint checked by `ConfigurationRecord::validate`.
    #[error("invalid configuration record: {0}")]
    InvalidRecord(String),

    /// The text-completion service failed.
    #[error("completion service failed: {0}")]
    Service(#[from] ServiceError),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::UnknownField(_) => exit_codes::USER_ERROR,
            PromptError::LookupMiss(_) => exit_codes::LOOKUP_MISS,
            PromptError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            PromptError::InvalidRecord(_) => exit_codes::INVALID_RECORD,
            PromptError::Service(_) => exit_codes::SERVICE_FAILURE,
        }
    }
}

/// Result type alias for promptgen operations.
pub type Result<T> = std::result::Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_miss_has_its_own_exit_code() {
        let err = PromptError::LookupMiss("zzz".to_string());
        assert_eq!(err.exit_code(), exit_codes::LOOKUP_MISS);
        assert_eq!(err.to_string(), "no preset matches 'zzz'");
    }

    #[test]
    fn user_facing_errors_map_to_user_error() {
        assert_eq!(
            PromptError::UserError("bad".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(
            PromptError::UnknownField("nope".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
    }

    #[test]
    fn template_error_converts() {
        let err: PromptError = TemplateError::EmptyVariableName { position: 3 }.into();
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
        assert!(err.to_string().starts_with("template error:"));
    }

    #[test]
    fn service_error_converts() {
        let err: PromptError = ServiceError::RateLimit("slow down".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::SERVICE_FAILURE);
        assert!(err.to_string().contains("slow down"));
    }

    #[test]
    fn invalid_record_message() {
        let err = PromptError::InvalidRecord("mid (80) exceeds high (70)".to_string());
        assert_eq!(err.exit_code(), exit_codes::INVALID_RECORD);
        assert_eq!(
            err.to_string(),
            "invalid configuration record: mid (80) exceeds high (70)"
        );
    }
}
