//! Error classification and leak prevention
//!
//! Every failure in the digest pipeline is converted into exactly one
//! [`ClassifiedError`]. Validation-class failures keep their specific reason
//! text: it only describes the shape or security of the request itself.
//! Everything else is collapsed to a fixed generic message per kind, and the
//! underlying detail is written to the server-side log keyed by a fresh
//! correlation id.

use rand::{Rng, distr::Alphanumeric};
use serde::{Deserialize, Serialize};

use super::{AlgorithmError, Error, InternalError};

/// Length of the opaque correlation token
const CORRELATION_ID_LEN: usize = 12;

/// Generic message shown for computation failures
const COMPUTATION_FAILED_MESSAGE: &str =
    "Hash computation failed due to an internal error. Please try again.";

/// Generic message shown for configuration failures
const CONFIGURATION_ERROR_MESSAGE: &str = "The service is not configured correctly.";

/// Failure taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Input length/encoding/content checks failed
    InputValidationFailed,
    /// Algorithm name is neither whitelisted nor denylisted
    AlgorithmNotSupported,
    /// Algorithm name matches the fixed denylist
    AlgorithmInsecure,
    /// Digest primitive failure or unexpected internal fault
    ComputationFailed,
    /// Registry or service misconfigured at startup
    ConfigurationError,
}

impl ErrorKind {
    /// Whether this kind may surface its specific reason text to callers
    pub fn exposes_detail(&self) -> bool {
        matches!(
            self,
            Self::InputValidationFailed | Self::AlgorithmNotSupported | Self::AlgorithmInsecure
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::InputValidationFailed => "InputValidationFailed",
            Self::AlgorithmNotSupported => "AlgorithmNotSupported",
            Self::AlgorithmInsecure => "AlgorithmInsecure",
            Self::ComputationFailed => "ComputationFailed",
            Self::ConfigurationError => "ConfigurationError",
        };
        f.write_str(name)
    }
}

/// A classified, caller-safe failure record
///
/// `user_message` is always safe to display. `detail` carries the internal
/// description for server-side use only and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub correlation_id: String,
    pub user_message: String,
    #[serde(skip)]
    detail: Option<String>,
}

impl ClassifiedError {
    /// Classify a pipeline error, logging generic kinds server-side
    pub fn classify(error: Error) -> Self {
        let correlation_id = new_correlation_id();
        match error {
            Error::Validation(err) => Self {
                kind: ErrorKind::InputValidationFailed,
                correlation_id,
                user_message: err.to_string(),
                detail: None,
            },
            Error::Algorithm(err) => {
                let kind = match err {
                    AlgorithmError::Insecure { .. } => ErrorKind::AlgorithmInsecure,
                    AlgorithmError::NotSupported { .. } => ErrorKind::AlgorithmNotSupported,
                };
                Self {
                    kind,
                    correlation_id,
                    user_message: err.to_string(),
                    detail: None,
                }
            }
            Error::Internal(err) => {
                // Internal kinds collapse to one fixed message each; the
                // specific detail goes to the server-side log only
                let (kind, user_message) = match err {
                    InternalError::DigestComputation { .. } => {
                        (ErrorKind::ComputationFailed, COMPUTATION_FAILED_MESSAGE)
                    }
                    InternalError::Configuration { .. } => {
                        (ErrorKind::ConfigurationError, CONFIGURATION_ERROR_MESSAGE)
                    }
                };
                let detail = err.to_string();
                log::error!("[{correlation_id}] {kind}: {detail}");
                Self {
                    kind,
                    correlation_id,
                    user_message: user_message.to_string(),
                    detail: Some(detail),
                }
            }
        }
    }

    /// Classify a failed validation outcome from its ordered error list
    pub fn input_validation(errors: &[String]) -> Self {
        Self {
            kind: ErrorKind::InputValidationFailed,
            correlation_id: new_correlation_id(),
            user_message: errors.join("; "),
            detail: None,
        }
    }

    /// Server-side detail, if any (never serialized to callers)
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl std::fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}]: {}",
            self.kind, self.correlation_id, self.user_message
        )
    }
}

impl std::error::Error for ClassifiedError {}

/// Generate a fresh opaque correlation token
fn new_correlation_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CORRELATION_ID_LEN)
        .map(char::from)
        .collect()
}
