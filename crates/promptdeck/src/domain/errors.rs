//! Domain Errors
//!
//! Error types for provider operations. Every failure is terminal for
//! the operation that produced it; nothing is retried at this layer.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure talking to the prompt service.
    #[error("API error: {0}")]
    Api(String),

    /// The call completed but the service answered with a status other
    /// than the one expected for this operation.
    #[error("Unexpected API response: {operation} expected {expected}, got {got}")]
    UnexpectedStatus {
        operation: &'static str,
        expected: u16,
        got: u16,
    },

    /// A lookup found no matching entity.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The user-supplied configuration cannot be resolved into a request.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ProviderError {
    pub fn api(err: impl std::fmt::Display) -> Self {
        Self::Api(err.to_string())
    }

    pub fn unexpected_status(operation: &'static str, expected: u16, got: u16) -> Self {
        Self::UnexpectedStatus {
            operation,
            expected,
            got,
        }
    }

    pub fn not_found_by_id(id: Uuid) -> Self {
        Self::NotFound(format!("Prompt with id '{}' not found", id))
    }

    pub fn not_found_by_name(name: &str) -> Self {
        Self::NotFound(format!("Prompt with name '{}' not found", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = ProviderError::unexpected_status("create prompt", 201, 500);
        assert_eq!(
            err.to_string(),
            "Unexpected API response: create prompt expected 201, got 500"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = ProviderError::not_found_by_name("greeting");
        assert_eq!(err.to_string(), "Not found: Prompt with name 'greeting' not found");
    }
}
