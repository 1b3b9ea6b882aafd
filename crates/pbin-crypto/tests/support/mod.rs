//! Independent PrivateBin v2 reader used to check what the encryptor writes.
//!
//! Works the way a browser viewer does: the AAD is the re-serialized `adata`
//! value, the key comes from the base58 fragment.

#![allow(dead_code)]

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use hmac::Hmac;
use serde_json::Value;
use sha2::Sha256;

/// Decoded public parameters of a paste body.
pub struct ParsedPaste {
    pub iv: Vec<u8>,
    pub salt: Vec<u8>,
    pub iterations: u32,
    pub aad: Vec<u8>,
    pub sealed: Vec<u8>,
}

pub fn parse(body: &str) -> ParsedPaste {
    let value: Value = serde_json::from_str(body).expect("body is JSON");
    let spec = value["adata"][0].as_array().expect("spec array");

    ParsedPaste {
        iv: STANDARD_NO_PAD
            .decode(spec[0].as_str().expect("iv string"))
            .expect("iv base64"),
        salt: STANDARD_NO_PAD
            .decode(spec[1].as_str().expect("salt string"))
            .expect("salt base64"),
        iterations: spec[2].as_u64().expect("iterations") as u32,
        aad: serde_json::to_vec(&value["adata"]).expect("adata reserializes"),
        sealed: STANDARD_NO_PAD
            .decode(value["ct"].as_str().expect("ct string"))
            .expect("ct base64"),
    }
}

pub fn derive(master: &[u8], salt: &[u8], iterations: u32) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(master, salt, iterations, &mut key).expect("pbkdf2");
    key
}

/// Derive the AES key for `paste` from its base58 master key.
pub fn derive_for(paste: &ParsedPaste, key_b58: &str) -> [u8; 32] {
    let master = bs58::decode(key_b58).into_vec().expect("base58 key");
    derive(&master, &paste.salt, paste.iterations)
}

/// Decrypt parsed parameters with a base58 key; `None` on authentication failure.
pub fn open_parsed(paste: &ParsedPaste, key_b58: &str) -> Option<Vec<u8>> {
    open_with(paste, &derive_for(paste, key_b58))
}

/// Decrypt with an already derived AES key.
pub fn open_with(paste: &ParsedPaste, key: &[u8; 32]) -> Option<Vec<u8>> {
    Aes256Gcm::new_from_slice(key)
        .ok()?
        .decrypt(
            Nonce::from_slice(&paste.iv),
            Payload {
                msg: &paste.sealed,
                aad: &paste.aad,
            },
        )
        .ok()
}

/// Decrypt a request body and return the `paste` field of the plaintext.
pub fn open(body: &str, key_b58: &str) -> Option<String> {
    let plaintext = open_parsed(&parse(body), key_b58)?;
    let content: Value = serde_json::from_slice(&plaintext).ok()?;
    content["paste"].as_str().map(str::to_string)
}
