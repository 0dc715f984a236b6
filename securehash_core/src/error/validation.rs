//! Input validation error types

use thiserror::Error;

/// Errors produced by the input validation pipeline
///
/// These messages are safe to surface to callers verbatim: they describe the
/// shape of the request, never the internals of the service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input shorter than the configured minimum
    #[error("Input too short: {length} characters, minimum is {min_length}")]
    TooShort { length: usize, min_length: usize },

    /// Input longer than the configured maximum
    #[error("Input too long: {length} characters exceeds maximum of {max_length}")]
    TooLong { length: usize, max_length: usize },

    /// Input did not survive a UTF-8 encode/decode round trip
    #[error("Input is not valid UTF-8 text")]
    InvalidEncoding,

    /// Input contains a NUL byte
    #[error("Input must not contain NUL characters")]
    NulByte,

    /// Input contains a character outside the allowed classes
    #[error("Input contains a disallowed character at position {position}")]
    DisallowedCharacter { position: usize },

    /// Algorithm name contains characters outside letters/digits/hyphen/underscore
    #[error(
        "Algorithm name '{name}' has invalid format: only letters, digits, hyphen and underscore are allowed"
    )]
    AlgorithmNameFormat { name: String },

    /// Algorithm name is empty after trimming
    #[error("Algorithm name must not be empty")]
    EmptyAlgorithmName,
}

impl ValidationError {
    /// Create a too-short error
    pub fn too_short(length: usize, min_length: usize) -> Self {
        Self::TooShort { length, min_length }
    }

    /// Create a too-long error
    pub fn too_long(length: usize, max_length: usize) -> Self {
        Self::TooLong { length, max_length }
    }

    /// Create a NUL byte error
    pub fn nul_byte() -> Self {
        Self::NulByte
    }

    /// Create a disallowed character error
    pub fn disallowed_character(position: usize) -> Self {
        Self::DisallowedCharacter { position }
    }

    /// Create an algorithm name format error
    pub fn algorithm_name_format(name: &str) -> Self {
        Self::AlgorithmNameFormat {
            name: name.to_string(),
        }
    }
}
