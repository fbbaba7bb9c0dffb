use std::path::PathBuf;

use thiserror::Error;

use crate::models::error::ValidationError;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("unknown time horizon '{key}', expected one of: {}", known.join(", "))]
    UnknownTimeHorizon { key: String, known: Vec<String> },

    #[error("default horizon '{0}' is not declared")]
    UndeclaredDefault(String),
    #[error("duplicate horizon key '{0}' after normalization")]
    DuplicateHorizon(String),
    #[error("strategy file declares no horizons")]
    NoHorizons,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to parse strategy file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read strategy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
