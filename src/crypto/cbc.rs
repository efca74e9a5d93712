//! AES-128-CBC with PKCS#7 padding, the legacy payload generation.
//!
//! **Deprecated, kept for compatibility with older firmware only.** CBC gives
//! confidentiality but no integrity: a flipped ciphertext bit silently turns
//! into different plaintext or a padding failure. New senders use
//! [`super::gcm`].

use aes::Aes128;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::NoPadding};
use tracing::debug;

use super::{BLOCK_LEN, CBC_IV_LEN, Key, hex, padding};
use crate::error::{CryptoError, Result};

type Aes128CbcEnc = ::cbc::Encryptor<Aes128>;
type Aes128CbcDec = ::cbc::Decryptor<Aes128>;

/// Encrypt `plaintext` under `key` with the IV given as 32 hex characters.
///
/// Returns the hex ciphertext, always a whole number of blocks.
pub fn encrypt(key: &Key, plaintext: &[u8], iv_hex: &str) -> Result<String> {
    let iv: [u8; CBC_IV_LEN] = hex::decode_exact(iv_hex, "iv")?;
    let padded = padding::pad(plaintext, BLOCK_LEN);

    let encryptor = Aes128CbcEnc::new_from_slices(key.as_bytes(), &iv)
        .map_err(|_| CryptoError::KeySchedule)?;
    let ciphertext = encryptor.encrypt_padded_vec_mut::<NoPadding>(&padded);

    debug!(len = ciphertext.len(), "cbc payload encrypted");
    Ok(hex::encode(ciphertext))
}

/// Decrypt a CBC message and strip its padding.
///
/// # Errors
///
/// Returns [`CryptoError::DecryptionFailed`] for a malformed IV, empty or
/// unaligned ciphertext, and invalid padding alike.
pub fn decrypt(key: &Key, cipher_hex: &str, iv_hex: &str) -> Result<Vec<u8>> {
    open(key, cipher_hex, iv_hex).map_err(|_| {
        debug!("cbc payload rejected");
        CryptoError::DecryptionFailed
    })
}

fn open(key: &Key, cipher_hex: &str, iv_hex: &str) -> Result<Vec<u8>> {
    let iv: [u8; CBC_IV_LEN] = hex::decode_exact(iv_hex, "iv")?;
    let ciphertext = hex::decode(cipher_hex)?;
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::InvalidLength {
            what: "ciphertext",
            expected: BLOCK_LEN,
            got: ciphertext.len(),
        });
    }

    let decryptor = Aes128CbcDec::new_from_slices(key.as_bytes(), &iv)
        .map_err(|_| CryptoError::KeySchedule)?;
    let padded = decryptor
        .decrypt_padded_vec_mut::<NoPadding>(&ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)?;

    let plaintext = padding::unpad(&padded, BLOCK_LEN)?.to_vec();
    debug!(len = plaintext.len(), "cbc payload decrypted");
    Ok(plaintext)
}
