use crate::validation::ValidationReport;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation failed:\n{0}")]
    Validation(ValidationReport),

    #[error("{0}")]
    Unavailable(String),

    #[error("Access denied: {0}")]
    Auth(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl HotelError {
    pub fn not_found(kind: &'static str, id: Uuid) -> Self {
        HotelError::NotFound { kind, id }
    }
}

pub type Result<T> = std::result::Result<T, HotelError>;
