use assert_cmd::Command;
use predicates::prelude::*;

const KEY: &str = "16charSecretKey!";
const LUX: &str = r#"{"lux":123}"#;
const NONCE: &str = "cafebabefacedbaddecaf888";

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("telecrypt"));
    cmd.env_remove("TELECRYPT_KEY")
        .env_remove("TELECRYPT_SCHEME")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap().trim_end().to_string()
}

#[test]
fn nonce_prints_hex_of_scheme_length() {
    let gcm = stdout_of(bin().arg("nonce"));
    assert_eq!(gcm.len(), 24);
    assert!(gcm.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    let cbc = stdout_of(bin().arg("nonce").arg("--scheme").arg("cbc"));
    assert_eq!(cbc.len(), 32);
}

#[test]
fn seal_and_open_roundtrip() {
    let envelope = stdout_of(bin().env("TELECRYPT_KEY", KEY).arg("seal").arg(LUX));

    let json: serde_json::Value = serde_json::from_str(&envelope).unwrap();
    assert_eq!(json["nonce"].as_str().unwrap().len(), 24);
    assert_eq!(json["payload"].as_str().unwrap().len(), 22);
    assert_eq!(json["tag"].as_str().unwrap().len(), 32);

    bin()
        .env("TELECRYPT_KEY", KEY)
        .arg("open")
        .arg(&envelope)
        .assert()
        .success()
        .stdout(predicate::str::contains(LUX));
}

#[test]
fn legacy_cbc_seal_and_open_roundtrip() {
    let envelope = stdout_of(
        bin()
            .env("TELECRYPT_KEY", KEY)
            .arg("seal")
            .arg("--scheme")
            .arg("cbc")
            .arg(LUX),
    );
    assert!(envelope.contains("msgIV"));

    bin()
        .env("TELECRYPT_KEY", KEY)
        .env("TELECRYPT_SCHEME", "cbc")
        .arg("open")
        .arg(&envelope)
        .assert()
        .success()
        .stdout(predicate::str::contains(LUX));
}

#[test]
fn passphrase_can_be_piped() {
    let envelope = stdout_of(bin().write_stdin(format!("{KEY}\n")).arg("seal").arg(LUX));

    bin()
        .env("TELECRYPT_KEY", KEY)
        .arg("open")
        .arg(&envelope)
        .assert()
        .success()
        .stdout(predicate::str::contains(LUX));
}

#[test]
fn wrong_key_fails() {
    let envelope = stdout_of(bin().env("TELECRYPT_KEY", KEY).arg("seal").arg(LUX));

    bin()
        .env("TELECRYPT_KEY", "not-the-right-key")
        .arg("open")
        .arg(&envelope)
        .assert()
        .failure()
        .stderr(predicate::str::contains("decryption failed"));
}

#[test]
fn explicit_nonce_encrypt_then_decrypt() {
    let envelope = stdout_of(
        bin()
            .env("TELECRYPT_KEY", KEY)
            .arg("encrypt")
            .arg("--nonce")
            .arg(NONCE)
            .arg(LUX),
    );
    let json: serde_json::Value = serde_json::from_str(&envelope).unwrap();
    let payload = json["payload"].as_str().unwrap();
    let tag = json["tag"].as_str().unwrap();
    assert_eq!(json["nonce"], NONCE);

    bin()
        .env("TELECRYPT_KEY", KEY)
        .arg("decrypt")
        .arg("--nonce")
        .arg(NONCE)
        .arg("--tag")
        .arg(tag)
        .arg(payload)
        .assert()
        .success()
        .stdout(predicate::str::contains(LUX));

    let mut flipped = tag.to_string();
    let first = if flipped.starts_with('0') { "1" } else { "0" };
    flipped.replace_range(0..1, first);

    bin()
        .env("TELECRYPT_KEY", KEY)
        .arg("decrypt")
        .arg("--nonce")
        .arg(NONCE)
        .arg("--tag")
        .arg(&flipped)
        .arg(payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("decryption failed"));
}

#[test]
fn encrypt_rejects_short_nonce() {
    bin()
        .env("TELECRYPT_KEY", KEY)
        .arg("encrypt")
        .arg("--nonce")
        .arg("abcd")
        .arg(LUX)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid nonce length"));
}

#[test]
fn gcm_receiver_refuses_cbc_envelope() {
    let envelope = stdout_of(
        bin()
            .env("TELECRYPT_KEY", KEY)
            .arg("seal")
            .arg("--scheme")
            .arg("cbc")
            .arg(LUX),
    );

    bin()
        .env("TELECRYPT_KEY", KEY)
        .arg("open")
        .arg(&envelope)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected gcm"));
}

#[test]
fn malformed_envelope_fails() {
    bin()
        .env("TELECRYPT_KEY", KEY)
        .arg("open")
        .arg(r#"{"payload":"00"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed envelope"));
}

#[test]
fn unknown_scheme_is_rejected() {
    bin()
        .arg("nonce")
        .arg("--scheme")
        .arg("ecb")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown cipher scheme"));
}
