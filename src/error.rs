// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Setup-time failures. These are fatal: a rule cannot be built from them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`levels` must name at least one level")]
    EmptyLevels,

    #[error("level `{0}` is declared more than once")]
    DuplicateLevel(String),

    #[error("level entry `{0}` has no name after its option markers")]
    EmptyLevelName(String),

    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("path pattern `{0}` must contain a capture group for the level name")]
    MissingCaptureGroup(String),

    #[error("`module` must be \"strict\", \"loose\", \"off\" or false, got {0}")]
    InvalidModuleMode(String),

    #[error("malformed config file {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum AtomlintError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, AtomlintError>;
