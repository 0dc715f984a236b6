//! Error types for the secure digest core
//!
//! This module contains all error types used throughout the library, organized
//! into logical categories for better maintainability and clarity.

use thiserror::Error;

pub mod algorithm;
pub mod classify;
pub mod internal;
pub mod validation;

pub use self::algorithm::AlgorithmError;
pub use self::classify::{ClassifiedError, ErrorKind};
pub use self::internal::InternalError;
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the secure digest core
///
/// Errors are categorized into three main types:
/// - Validation errors: input length, encoding, and content checks
/// - Algorithm errors: denylisted or unknown algorithm names
/// - Internal errors: digest computation and startup configuration
#[derive(Error, Debug)]
pub enum Error {
    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Algorithm selection errors
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    /// Internal library errors
    #[error(transparent)]
    Internal(#[from] InternalError),
}
