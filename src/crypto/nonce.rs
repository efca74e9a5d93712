use getrandom::fill;

use super::{CBC_IV_LEN, GCM_NONCE_LEN, hex};
use crate::error::{CryptoError, Result};

/// Which per-message randomizer to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceKind {
    /// 12-byte AES-GCM nonce.
    Gcm,
    /// 16-byte AES-CBC initialization vector.
    Cbc,
}

impl NonceKind {
    pub const fn len(self) -> usize {
        match self {
            NonceKind::Gcm => GCM_NONCE_LEN,
            NonceKind::Cbc => CBC_IV_LEN,
        }
    }
}

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|_| CryptoError::RandomUnavailable)
}

/// Generate a fresh random nonce (or IV) of the length `kind` requires.
pub fn generate(kind: NonceKind) -> Result<Vec<u8>> {
    let mut nonce = vec![0u8; kind.len()];
    secure_random(&mut nonce)?;
    Ok(nonce)
}

/// Generate a fresh nonce already hex encoded for the wire.
pub fn generate_hex(kind: NonceKind) -> Result<String> {
    generate(kind).map(hex::encode)
}
