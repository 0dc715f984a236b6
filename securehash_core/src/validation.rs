//! Input validation and sanitization
//!
//! Turns arbitrary caller-supplied text into a safe, canonical string or
//! rejects it with specific reasons. The pipeline stages are independent:
//! length, encoding, and content checks all run and accumulate their errors;
//! sanitization and warnings only apply to input that passed every check.

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::error::{Error, Result, ValidationError};
use crate::hashing::{AlgorithmRegistry, HashAlgorithm};

/// Default minimum input length in characters
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Default maximum input length in characters
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

/// Non-standard Unicode whitespace replaced with an ordinary space before
/// collapsing
const NONSTANDARD_WHITESPACE: [char; 19] = [
    '\u{00A0}', '\u{1680}', '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}',
    '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}', '\u{200A}', '\u{2028}',
    '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}', '\u{0085}',
];

/// Outcome of a validation pipeline run
///
/// Constructed only through the named factories; an invalid outcome always
/// carries at least one error and never carries sanitized data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    sanitized: Option<String>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationOutcome {
    /// Successful validation with no warnings
    pub fn success(sanitized: String) -> Self {
        Self {
            sanitized: Some(sanitized),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Successful validation with informational warnings
    pub fn success_with_warnings(sanitized: String, warnings: Vec<String>) -> Self {
        Self {
            sanitized: Some(sanitized),
            errors: Vec::new(),
            warnings,
        }
    }

    /// Failed validation with at least one specific reason
    pub fn failure(errors: Vec<String>) -> Self {
        debug_assert!(!errors.is_empty(), "failure outcome requires reasons");
        Self {
            sanitized: None,
            errors,
            warnings: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.sanitized.is_some()
    }

    /// Sanitized data, present only when valid
    pub fn sanitized_data(&self) -> Option<&str> {
        self.sanitized.as_deref()
    }

    /// Ordered list of failure reasons, empty when valid
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Informational warnings, possibly non-empty even when valid
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Validator with configured length limits
#[derive(Debug, Clone)]
pub struct InputValidator {
    min_length: usize,
    max_length: usize,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl InputValidator {
    /// Create a validator with explicit length limits
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Run the full validation and sanitization pipeline
    pub fn validate_and_sanitize(&self, input: &str) -> ValidationOutcome {
        let mut errors = Vec::new();

        let length = input.chars().count();
        if length < self.min_length {
            errors.push(ValidationError::too_short(length, self.min_length).to_string());
        } else if length > self.max_length {
            errors.push(ValidationError::too_long(length, self.max_length).to_string());
        }

        if !encoding_round_trips(input) {
            errors.push(ValidationError::InvalidEncoding.to_string());
        }

        errors.extend(content_errors(input));

        if !errors.is_empty() {
            return ValidationOutcome::failure(errors);
        }

        let sanitized = sanitize(input);
        let warnings = sanitization_warnings(input, &sanitized);
        if warnings.is_empty() {
            ValidationOutcome::success(sanitized)
        } else {
            ValidationOutcome::success_with_warnings(sanitized, warnings)
        }
    }

    /// Validate a caller-supplied algorithm name
    ///
    /// Classification is a single explicit ordering: format check, then the
    /// registry's denylist, then its whitelist. On success the sanitized data
    /// is the canonical algorithm name.
    pub fn validate_algorithm(&self, name: &str) -> ValidationOutcome {
        match self.check_algorithm(name) {
            Ok(algorithm) => ValidationOutcome::success(algorithm.canonical_name().to_string()),
            Err(err) => ValidationOutcome::failure(vec![err.to_string()]),
        }
    }

    /// Typed variant of [`validate_algorithm`](Self::validate_algorithm),
    /// preserving the insecure / not-supported distinction for classification
    pub fn check_algorithm(&self, name: &str) -> Result<HashAlgorithm> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation(ValidationError::EmptyAlgorithmName));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::Validation(ValidationError::algorithm_name_format(
                trimmed,
            )));
        }
        AlgorithmRegistry::global().resolve(trimmed)
    }
}

/// Re-encode to UTF-8 bytes and decode back, checking the round trip
///
/// A Rust `&str` is UTF-8 by construction, so this cannot fail for string
/// input; the stage is kept so the pipeline shape matches its contract for
/// callers feeding decoded foreign data.
fn encoding_round_trips(input: &str) -> bool {
    match std::str::from_utf8(input.as_bytes()) {
        Ok(decoded) => decoded == input,
        Err(_) => false,
    }
}

/// Content allow-list: letters, digits, punctuation, symbols, and whitespace
///
/// NUL is rejected unconditionally; everything else must fall in an allowed
/// Unicode category.
fn content_errors(input: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if input.contains('\u{0000}') {
        errors.push(ValidationError::nul_byte().to_string());
    }

    if let Some(position) = input
        .chars()
        .position(|c| c != '\u{0000}' && !is_allowed_character(c))
    {
        errors.push(ValidationError::disallowed_character(position).to_string());
    }

    errors
}

/// Allowed character classes: any whitespace, plus the Letter, Mark, Number,
/// Punctuation and Symbol category groups
///
/// Marks stay allowed so decomposed input still reaches the NFC stage.
/// Everything else (non-whitespace controls, format characters, private-use
/// and unassigned code points) is rejected.
fn is_allowed_character(c: char) -> bool {
    if c.is_whitespace() {
        return true;
    }
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Letter
            | GeneralCategoryGroup::Mark
            | GeneralCategoryGroup::Number
            | GeneralCategoryGroup::Punctuation
            | GeneralCategoryGroup::Symbol
    )
}

/// Canonicalize: NFC-normalize, standardize whitespace, collapse runs, trim
fn sanitize(input: &str) -> String {
    let normalized: String = input.nfc().collect();
    let standardized: String = normalized
        .chars()
        .map(|c| {
            if NONSTANDARD_WHITESPACE.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();
    standardized.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn sanitization_warnings(original: &str, _sanitized: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    let total = original.chars().count();
    let whitespace = original.chars().filter(|c| c.is_whitespace()).count();
    if total > 0 && whitespace * 2 > total {
        warnings.push(format!(
            "More than half of the input ({whitespace} of {total} characters) was whitespace and has been collapsed"
        ));
    }

    let nfc: String = original.nfc().collect();
    if nfc != original {
        warnings.push("Input was normalized to Unicode canonical composed form (NFC)".to_string());
    }

    warnings
}
