//! Error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("logger: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, Error>;
