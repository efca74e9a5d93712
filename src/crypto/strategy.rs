use std::fmt;
use std::str::FromStr;

use super::{Key, NonceKind, cbc, gcm};
use crate::error::{CryptoError, Result};

/// Cipher generation used for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CipherStrategy {
    /// AES-128-GCM with a detached tag.
    #[default]
    Gcm,
    /// AES-128-CBC with PKCS#7 padding. Deprecated, no integrity.
    Cbc,
}

/// Hex wire fields of one encrypted message.
///
/// `tag` is present for GCM and absent for CBC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    pub nonce: String,
    pub ciphertext: String,
    pub tag: Option<String>,
}

impl CipherStrategy {
    pub fn name(self) -> &'static str {
        match self {
            CipherStrategy::Gcm => "gcm",
            CipherStrategy::Cbc => "cbc",
        }
    }

    pub fn nonce_kind(self) -> NonceKind {
        match self {
            CipherStrategy::Gcm => NonceKind::Gcm,
            CipherStrategy::Cbc => NonceKind::Cbc,
        }
    }

    /// Encrypt with an explicit hex nonce (GCM) or IV (CBC).
    pub fn encrypt(self, key: &Key, plaintext: &[u8], nonce_hex: &str) -> Result<Sealed> {
        let (ciphertext, tag) = match self {
            CipherStrategy::Gcm => {
                let out = gcm::encrypt(key, plaintext, nonce_hex)?;
                (out.ciphertext, Some(out.tag))
            }
            CipherStrategy::Cbc => (cbc::encrypt(key, plaintext, nonce_hex)?, None),
        };

        Ok(Sealed {
            nonce: nonce_hex.to_ascii_lowercase(),
            ciphertext,
            tag,
        })
    }

    /// Decrypt the wire fields of `sealed`.
    ///
    /// A GCM message without a tag fails like any other malformed message.
    /// A tag on a CBC message is ignored; CBC has nothing to verify it against.
    pub fn decrypt(self, key: &Key, sealed: &Sealed) -> Result<Vec<u8>> {
        match self {
            CipherStrategy::Gcm => {
                let tag = sealed.tag.as_deref().ok_or(CryptoError::DecryptionFailed)?;
                gcm::decrypt(key, &sealed.ciphertext, &sealed.nonce, tag)
            }
            CipherStrategy::Cbc => cbc::decrypt(key, &sealed.ciphertext, &sealed.nonce),
        }
    }
}

impl fmt::Display for CipherStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gcm" => Ok(CipherStrategy::Gcm),
            "cbc" => Ok(CipherStrategy::Cbc),
            other => Err(format!("unknown cipher scheme '{other}' (expected gcm or cbc)")),
        }
    }
}
