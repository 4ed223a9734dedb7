use crate::model::CardId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardzError {
    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    #[error("Parent card not found: {0}")]
    ParentNotFound(CardId),

    #[error("Card store at {location} is unreadable ({reason}); refusing to overwrite it")]
    CorruptStore { location: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CardzError>;
