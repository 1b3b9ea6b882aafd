//! Paste request envelope
//!
//! The JSON object POSTed to a PrivateBin server:
//! ```text
//! {"v":2,"adata":[[...spec...],"plaintext",0,0],"meta":{"expire":"1day"},"ct":"<b64>"}
//! ```
//! It contains only ciphertext and public parameters, never the key.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use serde::Serialize;

use crate::spec::Adata;
use crate::{CryptoError, FORMAT_VERSION};

/// Paste metadata readable by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasteMeta {
    /// Retention policy token, passed through unvalidated
    pub expire: String,
}

/// A complete, server-submittable paste
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasteEnvelope {
    /// Format version (always 2)
    pub v: u32,
    pub adata: Adata,
    pub meta: PasteMeta,
    /// Unpadded standard base64 of ciphertext || tag
    pub ct: String,
}

impl PasteEnvelope {
    pub fn assemble(adata: Adata, sealed: &[u8], expire: impl Into<String>) -> Self {
        Self {
            v: FORMAT_VERSION,
            adata,
            meta: PasteMeta {
                expire: expire.into(),
            },
            ct: STANDARD_NO_PAD.encode(sealed),
        }
    }

    /// Serialize to the compact JSON request body
    pub fn to_json(&self) -> Result<String, CryptoError> {
        Ok(serde_json::to_string(self)?)
    }
}
