// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! The resolver never fails; these errors only come out of request loading
//! and `--strict` validation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskOrderError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unknown dependency: {0}")]
    UnknownDependency(String),

    #[error("Cycle detected in task dependencies: {0}")]
    DagCycle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TaskOrderError>;
