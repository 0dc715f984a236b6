//! Internal library error types
//!
//! Unlike validation and algorithm errors, the messages here are never shown
//! to callers directly; the classifier collapses them to generic text and logs
//! the detail server-side.

use thiserror::Error;

/// Internal library errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InternalError {
    /// Digest computation failed unexpectedly
    #[error("Digest computation failed for algorithm '{algorithm}': {message}")]
    DigestComputation { algorithm: String, message: String },

    /// Service configuration is invalid at startup
    #[error("Invalid service configuration: {message}")]
    Configuration { message: String },
}

impl InternalError {
    /// Create a digest computation error
    pub fn digest_computation(algorithm: &str, message: &str) -> Self {
        Self::DigestComputation {
            algorithm: algorithm.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
