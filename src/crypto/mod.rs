//! Cryptographic primitives for telemetry payloads.
//!
//! Provides key normalization, nonce generation, hex transport encoding,
//! PKCS#7 padding and the two cipher generations (AES-128-GCM and the legacy
//! AES-128-CBC).

pub mod cbc;
pub mod gcm;
pub mod hex;
pub mod key;
pub mod nonce;
pub mod padding;
pub mod strategy;

pub use key::Key;
pub use nonce::NonceKind;
pub use strategy::{CipherStrategy, Sealed};

/// Length of the AES-128 key (16 bytes).
pub const KEY_LEN: usize = 16;
/// Length of the AES block (16 bytes).
pub const BLOCK_LEN: usize = 16;
/// Length of the GCM nonce (12 bytes / 96 bits).
pub const GCM_NONCE_LEN: usize = 12;
/// Length of the CBC initialization vector (16 bytes).
pub const CBC_IV_LEN: usize = 16;
/// Length of the GCM authentication tag (16 bytes).
pub const TAG_LEN: usize = 16;
