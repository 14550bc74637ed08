//! Error types for the configuration and session layers.
//!
//! Question generation and tier tracking are infallible; only loading a
//! config file and driving a session in the wrong order can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading or validating an [`EngineConfig`](super::config::EngineConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors emitted by [`PracticeSession`](super::session::PracticeSession).
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session has not been started")]
    NotStarted,
    #[error("current question was already answered")]
    AlreadyAnswered,
    #[error("current question has not been answered yet")]
    NotAnswered,
    #[error("session already completed")]
    Completed,
    #[error("{0} is not one of the offered options")]
    UnknownOption(u32),
}
