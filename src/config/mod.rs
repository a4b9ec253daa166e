// src/config/mod.rs
pub mod types;

pub use self::types::{Config, HierarchyConfig, ResolverConfig, ScanConfig};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AtomlintError, ConfigError, Result};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "atomlint.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, or `atomlint.toml` in the working directory.
    ///
    /// An explicit path must exist; the implicit one falls back to defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), "loading config");
                Self::parse_toml(&content, &path)
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(AtomlintError::Io { source, path }),
        }
    }

    /// Parses TOML content. `origin` is only used in error messages.
    ///
    /// # Errors
    /// Returns error if the content is not a valid configuration.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| {
            AtomlintError::Config(ConfigError::Toml {
                path: origin.to_path_buf(),
                source,
            })
        })
    }
}
