use thiserror::Error;

pub type Result<T> = std::result::Result<T, CryptoError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("hex input has odd length")]
    OddHexLength,

    #[error("hex input contains a non-hex character")]
    InvalidHexCharacter,

    #[error("invalid {what} length: expected {expected} bytes, got {got}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid padding")]
    InvalidPadding,

    #[error("cipher key schedule failed")]
    KeySchedule,

    #[error("encryption failed")]
    EncryptionFailed,

    /// Every decryption failure surfaces as this one variant, whatever stage
    /// rejected the message.
    #[error("decryption failed")]
    DecryptionFailed,

    #[error("envelope was sealed with {found}, expected {expected}")]
    SchemeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("random generator unavailable")]
    RandomUnavailable,
}

impl From<hex::FromHexError> for CryptoError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::OddLength => CryptoError::OddHexLength,
            hex::FromHexError::InvalidHexCharacter { .. } => CryptoError::InvalidHexCharacter,
            // only raised by `hex::decode_to_slice`, which this crate does not call
            hex::FromHexError::InvalidStringLength => CryptoError::InvalidHexCharacter,
        }
    }
}
