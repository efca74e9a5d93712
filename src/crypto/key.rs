use zeroize::{Zeroize, ZeroizeOnDrop};

use super::KEY_LEN;

/// AES-128 key normalized from a passphrase.
///
/// The passphrase is copied byte for byte up to [`KEY_LEN`] bytes; shorter
/// passphrases are zero-filled and longer ones truncated. No hashing or
/// strengthening is applied, so the key is only as strong as the passphrase.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: [u8; KEY_LEN],
}

impl Key {
    pub fn normalize(passphrase: impl AsRef<[u8]>) -> Self {
        let passphrase = passphrase.as_ref();
        let mut bytes = [0u8; KEY_LEN];
        let len = passphrase.len().min(KEY_LEN);
        bytes[..len].copy_from_slice(&passphrase[..len]);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(..)")
    }
}
