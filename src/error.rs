use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReorderError>;

#[derive(Debug, Error)]
pub enum ReorderError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Duplicate item ID in order: {0}")]
    DuplicateItemId(String),

    #[error("Invalid item ID: {0:?}")]
    InvalidItemId(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Other(String),
}

impl From<toml::de::Error> for ReorderError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(feature = "sqlite-storage")]
impl From<rusqlite::Error> for ReorderError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StorageError(err.to_string())
    }
}
