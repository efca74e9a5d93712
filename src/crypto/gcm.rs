//! AES-128-GCM, the current payload generation.
//!
//! Each message carries a fresh 12-byte nonce and a detached 16-byte tag, both
//! hex encoded next to the ciphertext. The associated data is empty.
//!
//! **A (key, nonce) pair must never repeat.** GCM nonce reuse breaks both
//! confidentiality and authentication. Nonces are drawn at random (96 bits)
//! and are not tracked.

use aes_gcm::{
    Aes128Gcm, Nonce, Tag,
    aead::{AeadInPlace, KeyInit},
};
use tracing::debug;

use super::{GCM_NONCE_LEN, Key, TAG_LEN, hex};
use crate::error::{CryptoError, Result};

/// Hex encoded output of a GCM encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcmOutput {
    pub ciphertext: String,
    pub tag: String,
}

/// Encrypt `plaintext` under `key` with the nonce given as 24 hex characters.
///
/// The ciphertext is exactly as long as the plaintext.
///
/// # Errors
///
/// Returns a hex or [`CryptoError::InvalidLength`] error for a malformed
/// nonce, and [`CryptoError::KeySchedule`] if the cipher cannot be keyed.
pub fn encrypt(key: &Key, plaintext: &[u8], nonce_hex: &str) -> Result<GcmOutput> {
    let nonce: [u8; GCM_NONCE_LEN] = hex::decode_exact(nonce_hex, "nonce")?;
    let cipher = build_cipher(key)?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", &mut buffer)
        .map_err(|_| CryptoError::EncryptionFailed)?;

    debug!(len = buffer.len(), "gcm payload encrypted");

    Ok(GcmOutput {
        ciphertext: hex::encode(&buffer),
        tag: hex::encode(tag),
    })
}

/// Decrypt and authenticate a GCM message.
///
/// # Errors
///
/// Returns [`CryptoError::DecryptionFailed`] for every failure: malformed hex,
/// wrong nonce or tag length, and tag mismatch are not distinguished.
pub fn decrypt(key: &Key, cipher_hex: &str, nonce_hex: &str, tag_hex: &str) -> Result<Vec<u8>> {
    open(key, cipher_hex, nonce_hex, tag_hex).map_err(|_| {
        debug!("gcm payload rejected");
        CryptoError::DecryptionFailed
    })
}

fn open(key: &Key, cipher_hex: &str, nonce_hex: &str, tag_hex: &str) -> Result<Vec<u8>> {
    let nonce: [u8; GCM_NONCE_LEN] = hex::decode_exact(nonce_hex, "nonce")?;
    let tag: [u8; TAG_LEN] = hex::decode_exact(tag_hex, "tag")?;
    let mut buffer = hex::decode(cipher_hex)?;

    build_cipher(key)?
        .decrypt_in_place_detached(
            Nonce::from_slice(&nonce),
            b"",
            &mut buffer,
            Tag::from_slice(&tag),
        )
        .map_err(|_| CryptoError::DecryptionFailed)?;

    debug!(len = buffer.len(), "gcm payload decrypted");
    Ok(buffer)
}

fn build_cipher(key: &Key) -> Result<Aes128Gcm> {
    Aes128Gcm::new_from_slice(key.as_bytes()).map_err(|_| CryptoError::KeySchedule)
}
