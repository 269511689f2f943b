//! Configuration file loading.
//!
//! The settings file is a small JSON object colocated with the executable.
//! It is read exactly once per invocation; the loaded value is immutable and
//! passed explicitly to every component that needs it.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Settings loaded from `config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the Lingva instance, without a trailing slash.
    pub instance: String,
    /// Source language code used when `-s` is not given.
    pub default_source_language: String,
    /// Target language code used when `-t` is not given.
    pub default_target_language: String,
}

impl Config {
    /// Reads and parses the settings file at `path`.
    ///
    /// A single trailing `/` on the instance URL is stripped so request
    /// paths can be appended verbatim.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => ConfigError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let mut config: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(stripped) = config.instance.strip_suffix('/') {
            config.instance = stripped.to_string();
        }

        Ok(config)
    }

    /// Default settings location: `config.json` in the executable's
    /// directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let exe = std::env::current_exe().map_err(ConfigError::Location)?;
        let dir = exe.parent().ok_or_else(|| {
            ConfigError::Location(io::Error::other("executable has no parent directory"))
        })?;
        Ok(dir.join("config.json"))
    }
}
