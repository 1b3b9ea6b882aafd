//! Cipher parameter array and additional authenticated data.
//!
//! Wire format (compact JSON, order is part of the protocol):
//! ```text
//! adata = [[iv, salt, iterations, key_size, tag_size, algorithm, mode, compression],
//!          format, open_discussion, burn_after_reading]
//!       = [["<b64 iv>","<b64 salt>",100000,256,128,"aes","gcm","none"],"plaintext",0,0]
//! ```
//!
//! The serialized `adata` is both the AEAD associated data and the `adata`
//! field of the envelope, so one [`Serialize`] impl produces both.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::{CryptoError, ITERATIONS, IV_SIZE, SALT_SIZE};

pub const KEY_SIZE_BITS: u32 = 256;
pub const TAG_SIZE_BITS: u32 = 128;
pub const ALGORITHM: &str = "aes";
pub const MODE: &str = "gcm";
pub const COMPRESSION: &str = "none";
pub const FORMAT: &str = "plaintext";

/// The 8-element cipher parameter array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherSpec {
    /// Unpadded standard base64 of the 12-byte IV
    pub iv: String,
    /// Unpadded standard base64 of the 8-byte PBKDF2 salt
    pub salt: String,
    pub iterations: u32,
    pub key_size: u32,
    pub tag_size: u32,
    pub algorithm: &'static str,
    pub mode: &'static str,
    pub compression: &'static str,
}

impl CipherSpec {
    pub fn new(iv: &[u8; IV_SIZE], salt: &[u8; SALT_SIZE]) -> Self {
        Self {
            iv: STANDARD_NO_PAD.encode(iv),
            salt: STANDARD_NO_PAD.encode(salt),
            iterations: ITERATIONS,
            key_size: KEY_SIZE_BITS,
            tag_size: TAG_SIZE_BITS,
            algorithm: ALGORITHM,
            mode: MODE,
            compression: COMPRESSION,
        }
    }
}

impl Serialize for CipherSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(8)?;
        tup.serialize_element(&self.iv)?;
        tup.serialize_element(&self.salt)?;
        tup.serialize_element(&self.iterations)?;
        tup.serialize_element(&self.key_size)?;
        tup.serialize_element(&self.tag_size)?;
        tup.serialize_element(self.algorithm)?;
        tup.serialize_element(self.mode)?;
        tup.serialize_element(self.compression)?;
        tup.end()
    }
}

/// `[spec, "plaintext", 0, 0]`: cipher parameters plus the paste format,
/// open-discussion and burn-after-reading flags (both off).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adata {
    pub spec: CipherSpec,
}

impl Adata {
    pub fn new(spec: CipherSpec) -> Self {
        Self { spec }
    }

    /// Compact JSON bytes used as AEAD associated data.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CryptoError> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl Serialize for Adata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(4)?;
        tup.serialize_element(&self.spec)?;
        tup.serialize_element(FORMAT)?;
        tup.serialize_element(&0u8)?;
        tup.serialize_element(&0u8)?;
        tup.end()
    }
}
