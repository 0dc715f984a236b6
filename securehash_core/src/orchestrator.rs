//! Digest orchestration
//!
//! [`HashService`] is the single entry point composing validation, algorithm
//! resolution, and digest invocation into one operation. Every call is
//! synchronous, allocates only request-scoped values, and shares no mutable
//! state, so concurrent use needs no coordination.

use std::time::Instant;

use chrono::Utc;

use crate::error::{ClassifiedError, Error, InternalError, Result};
use crate::hashing::{AlgorithmDescriptor, AlgorithmRegistry, DigestResult, HashAlgorithm, encode_digest};
use crate::validation::InputValidator;
use crate::ServiceConfig;

/// Digest service over the whitelisted algorithm set
#[derive(Debug, Clone)]
pub struct HashService {
    validator: InputValidator,
    default_algorithm: HashAlgorithm,
}

impl Default for HashService {
    fn default() -> Self {
        Self {
            validator: InputValidator::default(),
            default_algorithm: HashAlgorithm::Sha256,
        }
    }
}

impl HashService {
    /// Build a service from a configuration, validating it up front
    ///
    /// Configuration problems are fatal at startup and never surface
    /// per-request.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        if config.max_input_length == 0 {
            return Err(Error::Internal(InternalError::configuration(
                "max_input_length must be at least 1",
            )));
        }
        if config.min_input_length > config.max_input_length {
            return Err(Error::Internal(InternalError::configuration(format!(
                "min_input_length ({}) exceeds max_input_length ({})",
                config.min_input_length, config.max_input_length
            ))));
        }

        let validator = InputValidator::new(config.min_input_length, config.max_input_length);
        let default_algorithm = validator.check_algorithm(&config.default_algorithm).map_err(
            |err| {
                Error::Internal(InternalError::configuration(format!(
                    "default algorithm '{}' is not usable: {err}",
                    config.default_algorithm
                )))
            },
        )?;

        Ok(Self {
            validator,
            default_algorithm,
        })
    }

    /// Compute a digest of `input` with the named algorithm
    pub fn compute_hash(
        &self,
        input: &str,
        algorithm_name: &str,
    ) -> std::result::Result<DigestResult, ClassifiedError> {
        self.compute(input, Some(algorithm_name), None)
    }

    /// Compute a digest of `input` with the configured default algorithm
    pub fn compute_hash_default(
        &self,
        input: &str,
    ) -> std::result::Result<DigestResult, ClassifiedError> {
        self.compute(input, None, None)
    }

    /// Compute a digest of `context` + `input`
    ///
    /// The context is a caller-supplied prefix (for example an identity
    /// string); the core treats it as opaque input text.
    pub fn compute_hash_with_context(
        &self,
        input: &str,
        algorithm_name: &str,
        context: &str,
    ) -> std::result::Result<DigestResult, ClassifiedError> {
        self.compute(input, Some(algorithm_name), Some(context))
    }

    /// Secure algorithm descriptors, in canonical listing order
    pub fn list_supported_algorithms(&self) -> &'static [AlgorithmDescriptor] {
        AlgorithmRegistry::global().list_secure_algorithms()
    }

    /// Whether `name` resolves to a whitelisted algorithm
    pub fn is_algorithm_secure(&self, name: &str) -> bool {
        AlgorithmRegistry::global().is_algorithm_secure(name)
    }

    fn compute(
        &self,
        input: &str,
        algorithm_name: Option<&str>,
        context: Option<&str>,
    ) -> std::result::Result<DigestResult, ClassifiedError> {
        let outcome = self.validator.validate_and_sanitize(input);
        let Some(sanitized) = outcome.sanitized_data() else {
            return Err(ClassifiedError::input_validation(outcome.errors()));
        };

        let algorithm = match algorithm_name {
            Some(name) => self
                .validator
                .check_algorithm(name)
                .map_err(ClassifiedError::classify)?,
            None => self.default_algorithm,
        };

        let message = match context {
            Some(prefix) => format!("{prefix}{sanitized}"),
            None => sanitized.to_string(),
        };

        // Timing covers the digest call only, not validation
        let started = Instant::now();
        let bytes = AlgorithmRegistry::global().compute(algorithm, message.as_bytes());
        let elapsed_micros = started.elapsed().as_micros() as u64;

        if bytes.len() != algorithm.digest_len() {
            return Err(ClassifiedError::classify(Error::Internal(
                InternalError::digest_computation(
                    algorithm.canonical_name(),
                    &format!(
                        "primitive returned {} bytes, expected {}",
                        bytes.len(),
                        algorithm.digest_len()
                    ),
                ),
            )));
        }

        Ok(DigestResult {
            original_data: message,
            algorithm,
            hex_digest: encode_digest(&bytes),
            computed_at: Utc::now(),
            elapsed_micros,
        })
    }
}
