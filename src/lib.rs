pub mod crypto;
pub mod envelope;
mod error;

pub use crate::crypto::{CipherStrategy, Key, NonceKind, Sealed};
pub use crate::envelope::Envelope;
pub use crate::error::{CryptoError, Result};
use tracing::{debug, warn};

/// Encrypts and decrypts telemetry payloads under one normalized key.
///
/// The key is fixed for the lifetime of the instance unless replaced with
/// [`Cryptor::set_key`], which needs exclusive access. Share a `Cryptor`
/// across threads behind a lock if the key can change at runtime.
#[derive(Debug)]
pub struct Cryptor {
    key: Key,
    strategy: CipherStrategy,
}

impl Cryptor {
    pub fn new(passphrase: impl AsRef<[u8]>, strategy: CipherStrategy) -> Self {
        if strategy == CipherStrategy::Cbc {
            warn!("legacy cbc scheme selected; payloads are not authenticated");
        }
        Self {
            key: Key::normalize(passphrase),
            strategy,
        }
    }

    pub fn gcm(passphrase: impl AsRef<[u8]>) -> Self {
        Self::new(passphrase, CipherStrategy::Gcm)
    }

    pub fn strategy(&self) -> CipherStrategy {
        self.strategy
    }

    /// Replaces the key material.
    pub fn set_key(&mut self, passphrase: impl AsRef<[u8]>) {
        self.key = Key::normalize(passphrase);
        debug!("encryption key replaced");
    }

    /// Encrypts with a caller-supplied hex nonce (GCM) or IV (CBC).
    ///
    /// The nonce must never be reused with the same key.
    pub fn encrypt(&self, plaintext: &[u8], nonce_hex: &str) -> Result<Sealed> {
        self.strategy.encrypt(&self.key, plaintext, nonce_hex)
    }

    pub fn encrypt_str(&self, plaintext: &str, nonce_hex: &str) -> Result<Sealed> {
        self.encrypt(plaintext.as_bytes(), nonce_hex)
    }

    pub fn decrypt(&self, sealed: &Sealed) -> Result<Vec<u8>> {
        self.strategy.decrypt(&self.key, sealed)
    }

    /// Decrypts and interprets the payload as UTF-8 text.
    ///
    /// A payload that is not valid UTF-8 fails like any other rejected message.
    pub fn decrypt_str(&self, sealed: &Sealed) -> Result<String> {
        let plaintext = self.decrypt(sealed)?;
        String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailed)
    }

    /// Encrypts under a fresh random nonce and wraps the result for the wire.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Envelope> {
        let nonce = crypto::nonce::generate_hex(self.strategy.nonce_kind())?;
        let sealed = self.encrypt(plaintext, &nonce)?;
        Envelope::from_sealed(self.strategy, sealed)
    }

    /// Decrypts an envelope received from the wire.
    ///
    /// Envelopes of the other cipher generation are refused, so a GCM
    /// receiver cannot be downgraded to unauthenticated CBC.
    pub fn open(&self, envelope: &Envelope) -> Result<Vec<u8>> {
        let found = envelope.strategy();
        if found != self.strategy {
            warn!(expected = %self.strategy, %found, "envelope scheme mismatch");
            return Err(CryptoError::SchemeMismatch {
                expected: self.strategy.name(),
                found: found.name(),
            });
        }
        self.decrypt(&envelope.to_sealed())
    }

    pub fn open_str(&self, envelope: &Envelope) -> Result<String> {
        let plaintext = self.open(envelope)?;
        String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailed)
    }
}
