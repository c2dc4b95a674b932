// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the settings library
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No criterion survived normalization
    #[error("Provide at least one assessment criterion")]
    EmptyCriteriaSet,

    /// Field-level validation failed
    #[error("Settings validation failed: {0}")]
    Invalid(String),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
