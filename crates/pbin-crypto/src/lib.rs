//! pbin-crypto: client-side encryption for PrivateBin v2 pastes
//!
//! The server only ever sees ciphertext and public parameters. The master key
//! leaves this crate base58-encoded, destined for the URL fragment.
//!
//! Pipeline:
//! ```text
//! master key (32B, OsRng) ──┐
//! salt (8B, OsRng) ─────────┴─ PBKDF2-HMAC-SHA256, 100000 rounds ─▶ AES-256 key
//! iv (12B, OsRng) + salt ──▶ spec [iv, salt, 100000, 256, 128, "aes", "gcm", "none"]
//! adata = [spec, "plaintext", 0, 0]  (compact JSON, also the AEAD associated data)
//! {"paste": body} ──AES-256-GCM(key, iv, aad=adata)──▶ ct || tag
//! envelope = {"v": 2, "adata": adata, "meta": {"expire": ..}, "ct": b64(ct || tag)}
//! ```

pub mod encryptor;
pub mod envelope;
pub mod error;
pub mod filler;
pub mod kdf;
pub mod key;
pub mod random;
pub mod seal;
pub mod spec;

pub use encryptor::{encrypt, PasteEncryptor, ShareableResult};
pub use envelope::{PasteEnvelope, PasteMeta};
pub use error::{CryptoError, ErrorKind};
pub use filler::FillerGenerator;
pub use kdf::{derive_key, DerivedKey};
pub use key::{encode_key, generate_master_key, MasterKey};
pub use random::{generate_random_bytes, EntropySource, OsEntropy};
pub use seal::seal;
pub use spec::{Adata, CipherSpec};

/// Size of the master key and the derived AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// Size of the PBKDF2 salt in bytes
pub const SALT_SIZE: usize = 8;

/// Size of an AES-GCM nonce (96-bit)
pub const IV_SIZE: usize = 12;

/// Size of the GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// PBKDF2 iteration count fixed by the protocol
pub const ITERATIONS: u32 = 100_000;

/// Paste format version written to `v`
pub const FORMAT_VERSION: u32 = 2;
