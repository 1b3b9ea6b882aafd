use thiserror::Error;

pub type PbinResult<T> = Result<T, PbinError>;

#[derive(Debug, Error)]
pub enum PbinError {
    #[error("config error: {0}")]
    Config(String),

    #[error("malformed server response: {0}")]
    Response(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
