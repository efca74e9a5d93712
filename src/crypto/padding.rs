//! PKCS#7 block padding, used only by the legacy CBC generation.

use crate::error::{CryptoError, Result};

/// Append `block_size - len % block_size` bytes, each holding the pad length.
///
/// Block-aligned input still grows by a full block.
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!((1..=255).contains(&block_size));
    let pad_len = block_size - (data.len() % block_size);

    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strip a PKCS#7 trailer, validating every pad byte.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidPadding`] if the length is not a multiple of
/// `block_size`, the pad length is zero or larger than a block, or any
/// trailer byte disagrees with the pad length.
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(CryptoError::InvalidPadding);
    }

    let pad_len = usize::from(data[data.len() - 1]);
    if pad_len == 0 || pad_len > block_size {
        return Err(CryptoError::InvalidPadding);
    }

    let (body, trailer) = data.split_at(data.len() - pad_len);
    if trailer.iter().any(|&b| usize::from(b) != pad_len) {
        return Err(CryptoError::InvalidPadding);
    }

    Ok(body)
}
