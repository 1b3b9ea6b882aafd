//! Master key generation and base58 encoding for the URL fragment

use zeroize::Zeroize;

use crate::random::{random_array, EntropySource};
use crate::{CryptoError, KEY_SIZE};

/// The 256-bit per-paste secret. Never sent to the server. Zeroized on drop.
#[derive(Clone)]
pub struct MasterKey {
    bytes: [u8; KEY_SIZE],
}

impl MasterKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for MasterKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Generate a fresh random master key.
pub fn generate_master_key(source: &impl EntropySource) -> Result<MasterKey, CryptoError> {
    random_array(source).map(MasterKey::from_bytes)
}

/// Encode the master key with the Bitcoin base58 alphabet.
///
/// The alphabet has no `0`, `O`, `I` or `l` and no characters that need
/// percent-encoding in a URL fragment.
pub fn encode_key(master: &MasterKey) -> String {
    bs58::encode(master.as_bytes()).into_string()
}
