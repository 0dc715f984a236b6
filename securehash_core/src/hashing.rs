//! Digest algorithm catalogue and result types
//!
//! The supported algorithms form a fixed, compile-time enumeration: the
//! whitelist contains only NIST-approved, collision-resistant families
//! (SHA-2 and SHA-3 at 256 bits and above). Broken algorithms (MD5, SHA-1)
//! sit on an explicit denylist so their rejection can be told apart from an
//! unknown name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod algorithms;
mod registry;

pub use registry::AlgorithmRegistry;

/// Digest algorithms on the whitelist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256 (SHA-2 family)
    #[serde(rename = "SHA-256")]
    Sha256,
    /// SHA-384 (SHA-2 family)
    #[serde(rename = "SHA-384")]
    Sha384,
    /// SHA-512 (SHA-2 family)
    #[serde(rename = "SHA-512")]
    Sha512,
    /// SHA3-256 (SHA-3 family)
    #[serde(rename = "SHA3-256")]
    Sha3_256,
    /// SHA3-384 (SHA-3 family)
    #[serde(rename = "SHA3-384")]
    Sha3_384,
    /// SHA3-512 (SHA-3 family)
    #[serde(rename = "SHA3-512")]
    Sha3_512,
}

impl HashAlgorithm {
    /// All whitelisted algorithms, in canonical listing order
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
    ];

    /// Canonical registry name
    pub fn canonical_name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_384 => "SHA3-384",
            HashAlgorithm::Sha3_512 => "SHA3-512",
        }
    }

    /// Digest output length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 | HashAlgorithm::Sha3_256 => 32,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 => 48,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 => 64,
        }
    }

    /// Relative throughput class on typical server hardware
    pub fn performance_class(&self) -> PerformanceClass {
        match self {
            HashAlgorithm::Sha256 | HashAlgorithm::Sha512 => PerformanceClass::Fast,
            HashAlgorithm::Sha384 => PerformanceClass::Medium,
            HashAlgorithm::Sha3_256 => PerformanceClass::Medium,
            HashAlgorithm::Sha3_384 | HashAlgorithm::Sha3_512 => PerformanceClass::Slow,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-2 family, 256-bit digest, NIST FIPS 180-4",
            HashAlgorithm::Sha384 => "SHA-2 family, 384-bit digest, NIST FIPS 180-4",
            HashAlgorithm::Sha512 => "SHA-2 family, 512-bit digest, NIST FIPS 180-4",
            HashAlgorithm::Sha3_256 => "SHA-3 family, 256-bit digest, NIST FIPS 202",
            HashAlgorithm::Sha3_384 => "SHA-3 family, 384-bit digest, NIST FIPS 202",
            HashAlgorithm::Sha3_512 => "SHA-3 family, 512-bit digest, NIST FIPS 202",
        }
    }

    /// Immutable descriptor for this algorithm
    pub fn descriptor(&self) -> AlgorithmDescriptor {
        AlgorithmDescriptor {
            name: self.canonical_name(),
            secure: true,
            performance_class: self.performance_class(),
            description: self.description(),
        }
    }

    /// Compute the digest of `data`
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        algorithms::digest(*self, data)
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        AlgorithmRegistry::global().resolve(s)
    }
}

/// Performance class of a digest algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PerformanceClass {
    Fast,
    Medium,
    Slow,
}

impl std::fmt::Display for PerformanceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceClass::Fast => write!(f, "FAST"),
            PerformanceClass::Medium => write!(f, "MEDIUM"),
            PerformanceClass::Slow => write!(f, "SLOW"),
        }
    }
}

/// Immutable catalogue entry for a digest algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmDescriptor {
    pub name: &'static str,
    pub secure: bool,
    pub performance_class: PerformanceClass,
    pub description: &'static str,
}

/// Result of a successful digest computation
///
/// A pure value type: two results with the same fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestResult {
    /// The exact string that was hashed, post-sanitization
    pub original_data: String,
    /// Canonical name of the algorithm actually used
    pub algorithm: HashAlgorithm,
    /// Lowercase hex encoding of the digest bytes
    pub hex_digest: String,
    /// Time the digest was computed
    pub computed_at: DateTime<Utc>,
    /// Wall time of the digest call itself, in microseconds
    pub elapsed_micros: u64,
}

/// Encode digest bytes as lowercase hex, two characters per byte
pub fn encode_digest(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
