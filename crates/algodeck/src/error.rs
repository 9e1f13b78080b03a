use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Card already exists: {0}")]
    DuplicateCard(String),

    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("Invalid page size: {0} (allowed: 6, 12, 24, 48)")]
    InvalidPageSize(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl DeckError {
    pub fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        DeckError::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
