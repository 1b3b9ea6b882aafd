//! Errors produced by the encryption pipeline.

use thiserror::Error;

/// Failure of one pipeline stage. Every variant is terminal for the paste
/// being encrypted; nothing is retried.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The OS entropy source could not supply the requested bytes.
    #[error("randomness unavailable: could not draw {requested} bytes: {reason}")]
    RandomnessUnavailable { requested: usize, reason: String },

    /// PBKDF2 rejected its inputs.
    #[error("key derivation failed: {0}")]
    DerivationError(String),

    /// The AES-256-GCM cipher could not be keyed.
    #[error("cipher initialization failed: {0}")]
    CipherInitError(String),

    /// AES-256-GCM encryption failed.
    #[error("seal failed: {0}")]
    SealError(String),

    /// JSON encoding of the spec, plaintext, or envelope failed.
    #[error("serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Discriminant of a [`CryptoError`], for callers that branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RandomnessUnavailable,
    DerivationError,
    CipherInitError,
    SealError,
    SerializationError,
}

impl CryptoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptoError::RandomnessUnavailable { .. } => ErrorKind::RandomnessUnavailable,
            CryptoError::DerivationError(_) => ErrorKind::DerivationError,
            CryptoError::CipherInitError(_) => ErrorKind::CipherInitError,
            CryptoError::SealError(_) => ErrorKind::SealError,
            CryptoError::SerializationError(_) => ErrorKind::SerializationError,
        }
    }
}
