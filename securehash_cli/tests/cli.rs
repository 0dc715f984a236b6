use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_hash_sha256_known_vector() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("hash")
        .arg("abc")
        .arg("--algorithm")
        .arg("SHA-256")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ));
}

#[test]
fn test_hash_uses_default_algorithm() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("hash")
        .arg("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains("SHA-256:"));
}

#[test]
fn test_hash_reads_stdin() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("hash")
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ));
}

#[test]
fn test_hash_algorithm_name_is_case_insensitive() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("hash")
        .arg("abc")
        .arg("--algorithm")
        .arg("sha-256")
        .assert()
        .success()
        .stdout(predicate::str::contains("SHA-256:"));
}

#[test]
fn test_hash_md5_rejected_as_insecure() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("hash")
        .arg("abc")
        .arg("--algorithm")
        .arg("MD5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("insecure"));
}

#[test]
fn test_hash_unknown_algorithm_lists_supported() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("hash")
        .arg("abc")
        .arg("--algorithm")
        .arg("SHA-999")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"))
        .stderr(predicate::str::contains("SHA-256"));
}

#[test]
fn test_hash_json_output() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("hash")
        .arg("abc")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hex_digest\""))
        .stdout(predicate::str::contains("\"SHA-256\""));
}

#[test]
fn test_hash_with_context_prefix() {
    let direct = Command::cargo_bin("securehash")
        .unwrap()
        .arg("hash")
        .arg("user-42:abc")
        .assert()
        .success();
    let direct_output = String::from_utf8(direct.get_output().stdout.clone()).unwrap();

    let mut cmd = Command::cargo_bin("securehash").unwrap();
    let assert = cmd
        .arg("hash")
        .arg("abc")
        .arg("--context")
        .arg("user-42:")
        .assert()
        .success();
    let context_output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert_eq!(
        direct_output.lines().next().unwrap(),
        context_output.lines().next().unwrap()
    );
}

#[test]
fn test_algorithms_listing() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("SHA-256"))
        .stdout(predicate::str::contains("SHA3-512"))
        .stdout(predicate::str::contains("FAST"));
}

#[test]
fn test_algorithms_json_listing_has_no_insecure_entries() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("algorithms")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"secure\": true"))
        .stdout(predicate::str::contains("MD5").not());
}

#[test]
fn test_empty_input_fails_validation() {
    let mut cmd = Command::cargo_bin("securehash").unwrap();
    cmd.arg("hash")
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("minimum"));
}
