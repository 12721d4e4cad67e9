//! Error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("no window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("no element with id '{0}'")]
    MissingControl(String),

    #[error("element '{0}' is not a <select>")]
    NotASelect(String),

    #[error("local storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("storage access failed: {0}")]
    Storage(String),

    #[error("failed to add event listener: {0}")]
    Listener(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersistError>;
