//! Boundary to an external text-completion service.
//!
//! The crate never talks to a model itself. It produces prompt text and a
//! [`CompletionRequest`]; an application supplies a [`CompletionService`]
//! implementation that performs the actual call.

use crate::settings::Settings;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures a completion service may report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limited: {0}")]
    RateLimit(String),

    #[error("network failure: {0}")]
    Network(String),
}

/// Everything a completion service needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn from_settings(prompt: String, settings: &Settings) -> Self {
        Self {
            prompt,
            model: settings.model_name.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }
}

/// A text-completion backend.
pub trait CompletionService {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError>;
}

/// Send `request` to `service`, logging the outcome.
pub fn complete<S: CompletionService + ?Sized>(
    service: &S,
    request: &CompletionRequest,
) -> crate::error::Result<String> {
    debug!(
        model = %request.model,
        temperature = request.temperature,
        prompt_bytes = request.prompt.len(),
        "sending completion request"
    );
    match service.complete(request) {
        Ok(text) => {
            debug!(response_bytes = text.len(), "completion succeeded");
            Ok(text)
        }
        Err(err) => {
            warn!(model = %request.model, error = %err, "completion failed");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;
    use std::cell::RefCell;

    struct Recording {
        seen: RefCell<Vec<CompletionRequest>>,
        reply: Result<String, ServiceError>,
    }

    impl CompletionService for Recording {
        fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
            self.seen.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    fn request() -> CompletionRequest {
        CompletionRequest::from_settings("Say hi".to_string(), &Settings::default())
    }

    #[test]
    fn test_request_from_default_settings() {
        let req = request();
        assert_eq!(req.model, "gpt-4");
        assert_eq!(req.temperature, 0.7);
        assert_eq!(req.max_tokens, 1024);
        assert_eq!(req.prompt, "Say hi");
    }

    #[test]
    fn test_complete_passes_request_through() {
        let service = Recording {
            seen: RefCell::new(Vec::new()),
            reply: Ok("hi".to_string()),
        };
        let out = complete(&service, &request()).unwrap();
        assert_eq!(out, "hi");
        assert_eq!(service.seen.borrow().len(), 1);
        assert_eq!(service.seen.borrow()[0].prompt, "Say hi");
    }

    #[test]
    fn test_complete_maps_service_error() {
        let service = Recording {
            seen: RefCell::new(Vec::new()),
            reply: Err(ServiceError::Auth("bad key".to_string())),
        };
        let err = complete(&service, &request()).unwrap_err();
        assert!(matches!(err, PromptError::Service(ServiceError::Auth(_))));
        assert_eq!(err.to_string(), "completion service failed: authentication failed: bad key");
    }

    #[test]
    fn test_trait_object_usable() {
        let service: Box<dyn CompletionService> = Box::new(Recording {
            seen: RefCell::new(Vec::new()),
            reply: Err(ServiceError::Network("timeout".to_string())),
        });
        assert!(complete(service.as_ref(), &request()).is_err());
    }
}
