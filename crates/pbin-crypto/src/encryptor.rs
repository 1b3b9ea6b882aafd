//! Top-level paste encryption: payload + expiry policy → request body + key.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use zeroize::Zeroizing;

use crate::envelope::PasteEnvelope;
use crate::filler::FillerGenerator;
use crate::kdf::derive_key;
use crate::key::{encode_key, generate_master_key};
use crate::random::{random_array, EntropySource, OsEntropy};
use crate::seal::seal;
use crate::spec::{Adata, CipherSpec};
use crate::{CryptoError, IV_SIZE, SALT_SIZE};

/// Plaintext wrapper; the `paste` object is itself part of the encrypted data.
#[derive(Serialize)]
struct PasteContent<'a> {
    paste: &'a str,
}

/// What a caller needs after encrypting a paste: the JSON body for the server
/// and the base58 master key for the URL fragment.
#[derive(Debug)]
pub struct ShareableResult {
    pub body: String,
    pub key: SecretString,
}

impl ShareableResult {
    /// The base58 master key. Belongs in the link fragment only.
    pub fn key(&self) -> &str {
        self.key.expose_secret()
    }
}

/// Paste encryption service.
///
/// Stateless apart from configuration: every call draws fresh key material,
/// so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct PasteEncryptor<E = OsEntropy> {
    entropy: E,
    default_expire: String,
}

impl PasteEncryptor<OsEntropy> {
    pub fn new() -> Self {
        Self::with_entropy(OsEntropy)
    }
}

impl Default for PasteEncryptor<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> PasteEncryptor<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self {
            entropy,
            default_expire: pbin_core::DEFAULT_EXPIRE.to_string(),
        }
    }

    /// Expiry policy used when `encrypt` is given an empty one.
    pub fn with_default_expire(mut self, expire: impl Into<String>) -> Self {
        self.default_expire = expire.into();
        self
    }

    pub fn default_expire(&self) -> &str {
        &self.default_expire
    }

    /// Encrypt `payload` into a PrivateBin v2 paste.
    ///
    /// An empty `expire` selects the default policy. Any stage failure aborts
    /// the whole call; nothing partial is returned.
    pub fn encrypt(&self, payload: &str, expire: &str) -> Result<ShareableResult, CryptoError> {
        let expire = if expire.is_empty() {
            self.default_expire.as_str()
        } else {
            expire
        };

        let master = generate_master_key(&self.entropy)?;
        let plaintext = Zeroizing::new(serde_json::to_vec(&PasteContent { paste: payload })?);

        let iv: [u8; IV_SIZE] = random_array(&self.entropy)?;
        let salt: [u8; SALT_SIZE] = random_array(&self.entropy)?;
        let key = derive_key(&master, &salt)?;

        let adata = Adata::new(CipherSpec::new(&iv, &salt));
        let aad = adata.to_json_bytes()?;
        let sealed = seal(key.as_bytes(), &iv, &plaintext, &aad)?;
        drop(key);

        let body = PasteEnvelope::assemble(adata, &sealed, expire).to_json()?;
        tracing::debug!(
            plaintext_len = plaintext.len(),
            body_len = body.len(),
            expire,
            "paste encrypted"
        );

        Ok(ShareableResult {
            body,
            key: SecretString::from(encode_key(&master)),
        })
    }

    /// Encrypt `size` characters of filler text, for load testing.
    pub fn encrypt_random_payload<R: Rng>(
        &self,
        filler: &mut FillerGenerator<R>,
        size: usize,
        expire: &str,
    ) -> Result<ShareableResult, CryptoError> {
        let payload = Zeroizing::new(filler.generate(size));
        self.encrypt(&payload, expire)
    }
}

/// Encrypt `payload` with OS randomness and the default policy fallback.
pub fn encrypt(payload: &str, expire: &str) -> Result<ShareableResult, CryptoError> {
    PasteEncryptor::new().encrypt(payload, expire)
}
