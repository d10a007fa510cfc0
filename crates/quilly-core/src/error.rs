//! Error types.
//!
//! Per-frame system code never fails; these cover configuration loading
//! and explicit store operations only.

use std::path::PathBuf;

/// Errors raised while loading or validating a `SimConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config was not valid JSON for `SimConfig`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config parsed but holds unusable values.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors raised by the entity store wrapper.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The entity handle does not refer to a live entity.
    #[error("no such entity")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),
}
