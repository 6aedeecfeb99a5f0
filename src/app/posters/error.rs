use thiserror::Error;

#[derive(Debug, Error)]
pub enum PosterError {
    #[error("invalid image uri {uri}: {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("http status {status} for {uri}")]
    Status { status: u16, uri: String },

    #[error("image decode error: {0}")]
    Decode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
