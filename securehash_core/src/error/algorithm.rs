//! Algorithm selection error types

use thiserror::Error;

/// Errors produced when classifying a caller-supplied algorithm name
///
/// The two variants are deliberately distinct: a denylisted algorithm must be
/// reported as insecure, not merely unknown, so callers can explain *why* the
/// name was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Algorithm is on the fixed denylist (broken or deprecated)
    #[error("Algorithm '{name}' is insecure and not permitted: use one of the SHA-2 or SHA-3 family instead")]
    Insecure { name: String },

    /// Algorithm is neither whitelisted nor denylisted
    #[error("Algorithm '{name}' is not supported. Supported algorithms: {supported}")]
    NotSupported { name: String, supported: String },
}

impl AlgorithmError {
    /// Create an insecure algorithm error
    pub fn insecure(name: &str) -> Self {
        Self::Insecure {
            name: name.to_string(),
        }
    }

    /// Create a not-supported error enumerating the secure set
    pub fn not_supported(name: &str, supported: &[&str]) -> Self {
        Self::NotSupported {
            name: name.to_string(),
            supported: supported.join(", "),
        }
    }
}
