use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("Dimension mismatch error: {0}")]
    DimensionMismatch(String),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Feature not implemented: {0}")]
    NotImplemented(String),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
