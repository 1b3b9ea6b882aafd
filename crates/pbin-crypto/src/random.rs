//! Secure random source for master keys, salts and IVs.

use rand::{rngs::OsRng, RngCore};

use crate::CryptoError;

/// A cryptographically secure source of random bytes.
///
/// Implementations must be safe to share between threads: a single
/// [`crate::PasteEncryptor`] serves concurrent callers without locking.
pub trait EntropySource: Send + Sync {
    /// Fill `buf` completely or fail with [`CryptoError::RandomnessUnavailable`].
    fn fill(&self, buf: &mut [u8]) -> Result<(), CryptoError>;
}

/// The operating system CSPRNG (`getrandom`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| CryptoError::RandomnessUnavailable {
                requested: buf.len(),
                reason: e.to_string(),
            })
    }
}

/// Draw `n` bytes from the OS CSPRNG.
pub fn generate_random_bytes(n: usize) -> Result<Vec<u8>, CryptoError> {
    let mut bytes = vec![0u8; n];
    OsEntropy.fill(&mut bytes)?;
    Ok(bytes)
}

/// Draw a fixed-size array from `source`.
pub(crate) fn random_array<const N: usize>(
    source: &impl EntropySource,
) -> Result<[u8; N], CryptoError> {
    let mut bytes = [0u8; N];
    source.fill(&mut bytes)?;
    Ok(bytes)
}
