//! JSON members carrying an encrypted payload over the outer transport.
//!
//! GCM frames:
//! ```text
//! {"nonce": "<24 hex>", "payload": "<2 * len hex>", "tag": "<32 hex>"}
//! ```
//!
//! Legacy CBC frames, as older firmware and the device simulator send them:
//! ```text
//! {"msgIV": "<32 hex>", "payload": "<multiple of 32 hex>"}
//! ```
//!
//! The generation is recognised from the member set. Other members of the
//! frame (channel, identity, api key) are ignored here. Field lengths are
//! checked by the cipher, not the parser.

use serde::{Deserialize, Serialize};

use crate::crypto::{CipherStrategy, Sealed};
use crate::error::{CryptoError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Envelope {
    Gcm {
        nonce: String,
        payload: String,
        tag: String,
    },
    Cbc {
        #[serde(rename = "msgIV")]
        iv: String,
        payload: String,
    },
}

impl Envelope {
    /// Wraps wire fields produced by `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedEnvelope`] if a GCM message lacks its tag.
    pub fn from_sealed(strategy: CipherStrategy, sealed: Sealed) -> Result<Self> {
        match strategy {
            CipherStrategy::Gcm => {
                let tag = sealed
                    .tag
                    .ok_or_else(|| CryptoError::MalformedEnvelope("gcm message without tag".into()))?;
                Ok(Envelope::Gcm {
                    nonce: sealed.nonce,
                    payload: sealed.ciphertext,
                    tag,
                })
            }
            CipherStrategy::Cbc => Ok(Envelope::Cbc {
                iv: sealed.nonce,
                payload: sealed.ciphertext,
            }),
        }
    }

    pub fn strategy(&self) -> CipherStrategy {
        match self {
            Envelope::Gcm { .. } => CipherStrategy::Gcm,
            Envelope::Cbc { .. } => CipherStrategy::Cbc,
        }
    }

    pub fn to_sealed(&self) -> Sealed {
        match self {
            Envelope::Gcm {
                nonce,
                payload,
                tag,
            } => Sealed {
                nonce: nonce.clone(),
                ciphertext: payload.clone(),
                tag: Some(tag.clone()),
            },
            Envelope::Cbc { iv, payload } => Sealed {
                nonce: iv.clone(),
                ciphertext: payload.clone(),
                tag: None,
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CryptoError::MalformedEnvelope(e.to_string()))
    }

    /// Parses an envelope out of a JSON frame.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedEnvelope`] if the text is not JSON or
    /// carries neither member set.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|_| {
            CryptoError::MalformedEnvelope("expected nonce/payload/tag or msgIV/payload".into())
        })
    }
}
