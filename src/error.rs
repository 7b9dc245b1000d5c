//! Error types for configuration and settings files

use thiserror::Error;

use crate::roster::RosterError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("invalid combatants: {0}")]
    Roster(#[from] RosterError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
