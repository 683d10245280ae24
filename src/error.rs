//! Error types for the engine and its configuration

use std::path::PathBuf;

use crate::board::{Player, Pos};

/// Errors raised by the engine and its state helpers.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("{player} has no legal moves")]
    NoLegalMoves { player: Player },

    #[error("illegal move {pos}")]
    IllegalMove { pos: Pos },

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
