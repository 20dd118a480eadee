use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Unknown resolution: {0}")]
    InvalidResolution(String),
}

pub type Result<T> = std::result::Result<T, SharedError>;
