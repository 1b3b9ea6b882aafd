//! pbin-core: configuration schema, error types, and the request/response
//! shapes exchanged with a PrivateBin server.

pub mod config;
pub mod error;
pub mod paste;

pub use error::{PbinError, PbinResult};

/// Expiry policy used when the caller supplies none.
pub const DEFAULT_EXPIRE: &str = "1day";
