use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// The fixed human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::NotFound(m) => m,
        }
    }
}
