//! AES-256-GCM sealing of the paste plaintext
//!
//! Output format (binary, base64-encoded into the envelope `ct` field):
//! ```text
//! [N bytes: ciphertext][16 bytes: GCM tag]
//! AAD = compact JSON adata array
//! ```
//!
//! The AAD binds the ciphertext to its cipher parameters, so a server cannot
//! swap the salt, IV or flags without the tag check failing.

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce,
};

use crate::{CryptoError, IV_SIZE};

/// Encrypt `plaintext` with AES-256-GCM, authenticating `aad` alongside it.
///
/// `key` must be 32 bytes; any other length is a [`CryptoError::CipherInitError`].
///
/// Returns: `[ciphertext][16-byte tag]`
pub fn seal(
    key: &[u8],
    iv: &[u8; IV_SIZE],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| {
        CryptoError::CipherInitError(format!(
            "AES-256-GCM needs a 32-byte key, got {} bytes",
            key.len()
        ))
    })?;

    cipher
        .encrypt(
            Nonce::from_slice(iv),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| CryptoError::SealError(format!("AES-256-GCM encryption failed: {e}")))
}
