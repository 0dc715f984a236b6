//! Whitelist/denylist registry for digest algorithms

use once_cell::sync::OnceCell;

use crate::error::{AlgorithmError, Result};

use super::{AlgorithmDescriptor, HashAlgorithm};

/// Denylisted algorithm spellings (normalized form, canonical report name)
///
/// These exist so a broken algorithm is rejected as *insecure* rather than
/// merely unknown.
const DENYLIST: [(&str, &str); 3] = [("MD5", "MD5"), ("SHA-1", "SHA-1"), ("SHA1", "SHA-1")];

/// Static catalogue of acceptable digest algorithms
///
/// Built once at first use and read-only thereafter, so concurrent lookups
/// need no locking.
pub struct AlgorithmRegistry {
    descriptors: Vec<AlgorithmDescriptor>,
}

impl AlgorithmRegistry {
    fn new() -> Self {
        Self {
            descriptors: HashAlgorithm::ALL
                .iter()
                .map(HashAlgorithm::descriptor)
                .collect(),
        }
    }

    /// Get the global registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(Self::new)
    }

    /// Secure algorithm descriptors, in canonical listing order
    pub fn list_secure_algorithms(&self) -> &[AlgorithmDescriptor] {
        &self.descriptors
    }

    /// Canonical names of the secure set, in listing order
    pub fn secure_names(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.name).collect()
    }

    /// Resolve a caller-supplied name to a whitelisted algorithm
    ///
    /// Matching trims surrounding whitespace and is case-insensitive; the
    /// canonical form is the registry's stored name, not the caller's casing.
    /// Classification order: denylist first, then whitelist.
    pub fn resolve(&self, name: &str) -> Result<HashAlgorithm> {
        let normalized = name.trim().to_uppercase();

        for (spelling, canonical) in DENYLIST {
            if normalized == spelling {
                return Err(AlgorithmError::insecure(canonical).into());
            }
        }

        for algorithm in HashAlgorithm::ALL {
            if normalized == algorithm.canonical_name() {
                return Ok(algorithm);
            }
        }

        Err(AlgorithmError::not_supported(name.trim(), &self.secure_names()).into())
    }

    /// Whether `name` resolves to a whitelisted algorithm
    pub fn is_algorithm_secure(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Compute a digest with an already-resolved algorithm
    ///
    /// The enum parameter makes it impossible to reach a primitive that was
    /// not validated as secure.
    pub fn compute(&self, algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
        algorithm.digest(data)
    }
}
