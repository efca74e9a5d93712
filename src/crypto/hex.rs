//! Hex transport encoding for nonces, IVs, ciphertext and tags.
//!
//! Output is always lowercase. Input is accepted in either case; odd-length
//! input and non-hex characters are rejected.

use crate::error::{CryptoError, Result};

/// Encode bytes as lowercase hex, two characters per byte.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    ::hex::encode(bytes)
}

/// Decode hex text into bytes.
///
/// # Errors
///
/// Returns [`CryptoError::OddHexLength`] for odd-length input and
/// [`CryptoError::InvalidHexCharacter`] for anything outside `0-9a-fA-F`.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(::hex::decode(text)?)
}

/// Decode hex text that must hold exactly `N` bytes.
///
/// `what` names the field in the length error.
pub fn decode_exact<const N: usize>(text: &str, what: &'static str) -> Result<[u8; N]> {
    let bytes = decode(text)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidLength {
            what,
            expected: N,
            got,
        })
}
