//! Shapes exchanged with a PrivateBin server.
//!
//! The encryption engine produces a JSON body and a base58 key. Submitting the
//! body and presenting the key are left to the caller; this module describes
//! what those collaborators send and receive.

use serde::{Deserialize, Serialize};

use crate::PbinResult;

/// Header PrivateBin requires to answer with JSON instead of HTML.
pub const REQUESTED_WITH: &str = "JSONHttpRequest";

/// Body and headers of a paste submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub body: String,
}

impl SubmitRequest {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Length of the body in bytes, not characters.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Content-Type",
                "application/x-www-form-urlencoded".to_string(),
            ),
            ("Content-Length", self.content_length().to_string()),
            ("X-Requested-With", REQUESTED_WITH.to_string()),
        ]
    }
}

/// Server acknowledgment for a submitted paste.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteResponse {
    /// 0 on success, 1 on error
    pub status: i32,
    pub id: String,
    pub url: String,
    #[serde(rename = "deletetoken")]
    pub delete_token: String,
    /// Error text, present when `status != 0`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PasteResponse {
    pub fn from_json(body: &str) -> PbinResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn is_success(&self) -> bool {
        self.status == 0
    }
}

/// Link a recipient opens to read the paste. The key travels in the
/// fragment, which browsers never send to the server.
pub fn share_link(server_url: &str, paste_id: &str, key: &str) -> String {
    format!("{}/?{paste_id}#{key}", server_url.trim_end_matches('/'))
}

/// Link that removes the paste from the server.
pub fn delete_link(server_url: &str, paste_id: &str, delete_token: &str) -> String {
    format!(
        "{}/?pasteid={paste_id}&deletetoken={delete_token}",
        server_url.trim_end_matches('/')
    )
}
