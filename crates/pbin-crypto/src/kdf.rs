//! Key derivation: PBKDF2-HMAC-SHA256 master key + salt → AES-256 key

use hmac::Hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::key::MasterKey;
use crate::{CryptoError, ITERATIONS, KEY_SIZE, SALT_SIZE};

/// A 256-bit AES key derived from the master key and a per-paste salt.
///
/// Zeroized on drop to prevent secrets lingering in memory.
pub struct DerivedKey {
    bytes: [u8; KEY_SIZE],
}

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive the paste encryption key with PBKDF2-HMAC-SHA256.
///
/// Iteration count ([`ITERATIONS`]) and output length ([`KEY_SIZE`]) are
/// fixed by the protocol; a decryptor assumes them from the spec array.
pub fn derive_key(master: &MasterKey, salt: &[u8; SALT_SIZE]) -> Result<DerivedKey, CryptoError> {
    let mut key = DerivedKey {
        bytes: [0u8; KEY_SIZE],
    };
    pbkdf2::pbkdf2::<Hmac<Sha256>>(master.as_bytes(), salt, ITERATIONS, &mut key.bytes)
        .map_err(|e| CryptoError::DerivationError(format!("PBKDF2-HMAC-SHA256: {e}")))?;
    Ok(key)
}
