// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::core::FetchError;
use crate::specs::ParseError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Невірний формат дня. Використовуйте ціле число для зсуву (got {0:?}).")]
    InvalidOffset(String),

    #[error("schedule source unavailable and no local snapshot at {path}: {source}")]
    NoFallback {
        path: PathBuf,
        #[source]
        source: FetchError,
    },

    #[error("malformed schedule document: {0}")]
    MalformedDocument(#[from] ParseError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read config {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
