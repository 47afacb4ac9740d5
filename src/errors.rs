// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Only the outer layers (project loading, file IO, the runtime shell) can
//! fail. The constraint evaluator and the layout core never return errors;
//! they degrade to `None` instead.

use thiserror::Error;

use crate::types::WorkId;

#[derive(Error, Debug)]
pub enum WorkdepsError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Work not found: {0}")]
    WorkNotFound(WorkId),

    #[error("Cycle detected in dependencies: {0}")]
    DependencyCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, WorkdepsError>;
