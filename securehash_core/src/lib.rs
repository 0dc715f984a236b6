//! Secure Digest Service Core
//!
//! Computes a cryptographic digest of a caller-supplied string using a
//! caller-selected, whitelisted algorithm, and reports the result (or a
//! sanitized failure) without leaking implementation or input details.
//!
//! The pipeline is strictly one way: raw input and algorithm name go through
//! the [`validation::InputValidator`], the [`orchestrator::HashService`]
//! resolves the algorithm against the [`hashing::AlgorithmRegistry`], digest
//! bytes are hex-encoded, and the caller gets an immutable
//! [`hashing::DigestResult`]. Failures short-circuit at any stage into a
//! [`error::ClassifiedError`] that is safe to show to callers.
//!
//! All operations are synchronous, free of shared mutable state, and safe for
//! unbounded concurrent invocation. Transport, content negotiation, and
//! rendering belong to external callers.

pub mod error;
pub mod hashing;
pub mod orchestrator;
pub mod validation;

// Re-export main types
pub use error::{ClassifiedError, Error, ErrorKind, Result};
pub use hashing::{
    AlgorithmDescriptor, AlgorithmRegistry, DigestResult, HashAlgorithm, PerformanceClass,
};
pub use orchestrator::HashService;
pub use validation::{InputValidator, ValidationOutcome};

/// Core service configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ServiceConfig {
    /// Minimum accepted input length, in characters
    pub min_input_length: usize,
    /// Maximum accepted input length, in characters
    pub max_input_length: usize,
    /// Algorithm used when the caller does not name one
    pub default_algorithm: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            min_input_length: validation::DEFAULT_MIN_LENGTH,
            max_input_length: validation::DEFAULT_MAX_LENGTH,
            default_algorithm: "SHA-256".to_string(),
        }
    }
}
