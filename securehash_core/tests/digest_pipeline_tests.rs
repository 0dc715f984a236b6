//! End-to-end tests for the digest pipeline

use proptest::prelude::*;
use securehash_core::{ErrorKind, HashAlgorithm, HashService, ServiceConfig};

#[test]
fn sha256_known_vector_abc() {
    let service = HashService::default();
    let result = service.compute_hash("abc", "SHA-256").unwrap();
    assert_eq!(
        result.hex_digest,
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn repeated_calls_are_deterministic() {
    let service = HashService::default();
    for algorithm in HashAlgorithm::ALL {
        let name = algorithm.canonical_name();
        let first = service.compute_hash("determinism", name).unwrap();
        let second = service.compute_hash("determinism", name).unwrap();
        assert_eq!(first.hex_digest, second.hex_digest, "{name}");
    }
}

#[test]
fn denylisted_algorithms_always_fail_insecure() {
    let service = HashService::default();
    for input in ["x", "some longer input", "äöü"] {
        for name in ["MD5", "SHA-1"] {
            let err = service.compute_hash(input, name).unwrap_err();
            assert_eq!(err.kind, ErrorKind::AlgorithmInsecure, "{input} / {name}");
            assert!(err.user_message.contains(name));
        }
    }
}

#[test]
fn unknown_algorithm_enumerates_secure_set() {
    let service = HashService::default();
    let err = service.compute_hash("x", "SHA-999").unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlgorithmNotSupported);
    for descriptor in service.list_supported_algorithms() {
        assert!(err.user_message.contains(descriptor.name));
    }
}

#[test]
fn algorithm_name_matching_is_tolerant() {
    let service = HashService::default();
    let canonical = service.compute_hash("x", "SHA-256").unwrap();
    for name in ["sha-256", "  SHA-256  ", "Sha-256"] {
        let result = service.compute_hash("x", name).unwrap();
        assert_eq!(result.algorithm.canonical_name(), "SHA-256");
        assert_eq!(result.hex_digest, canonical.hex_digest);
    }
}

#[test]
fn nul_byte_fails_validation_regardless_of_algorithm() {
    let service = HashService::default();
    for name in ["SHA-256", "SHA-999", "MD5"] {
        let err = service.compute_hash("a\u{0000}b", name).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InputValidationFailed, "{name}");
    }
}

#[test]
fn length_boundary_messages_cite_both_lengths() {
    let config = ServiceConfig::default();
    let max = config.max_input_length;
    let service = HashService::new(config).unwrap();

    assert!(service.compute_hash(&"a".repeat(max), "SHA-256").is_ok());

    let err = service
        .compute_hash(&"a".repeat(max + 1), "SHA-256")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InputValidationFailed);
    assert!(err.user_message.contains(&(max + 1).to_string()));
    assert!(err.user_message.contains(&max.to_string()));
}

#[test]
fn listing_contains_only_secure_entries_in_order() {
    let service = HashService::default();
    let names: Vec<_> = service
        .list_supported_algorithms()
        .iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(
        names,
        vec!["SHA-256", "SHA-384", "SHA-512", "SHA3-256", "SHA3-384", "SHA3-512"]
    );
}

#[test]
fn digest_result_serializes_for_callers() {
    let service = HashService::default();
    let result = service.compute_hash("abc", "SHA3-512").unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"SHA3-512\""));
    assert!(json.contains(&result.hex_digest));
}

proptest! {
    #[test]
    fn hex_digest_length_is_twice_digest_len(input in "[a-zA-Z0-9]{1,200}") {
        let service = HashService::default();
        for algorithm in HashAlgorithm::ALL {
            let result = service
                .compute_hash(&input, algorithm.canonical_name())
                .unwrap();
            prop_assert_eq!(result.hex_digest.len(), 2 * algorithm.digest_len());
            prop_assert_eq!(
                hex::decode(&result.hex_digest).unwrap().len(),
                algorithm.digest_len()
            );
        }
    }

    #[test]
    fn compute_hash_is_deterministic(input in "[ -~]{1,100}") {
        let service = HashService::default();
        let first = service.compute_hash(&input, "SHA-256");
        let second = service.compute_hash(&input, "SHA-256");
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.hex_digest, b.hex_digest),
            (Err(a), Err(b)) => prop_assert_eq!(a.kind, b.kind),
            _ => prop_assert!(false, "validation must be deterministic"),
        }
    }
}
