//! Runtime configuration.
//!
//! Values are layered: built-in defaults, then a TOML file, then
//! environment variables. Command line flags are applied last by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Read when no `--config` is given and the file exists.
pub const DEFAULT_CONFIG_FILE: &str = "quiz-forge.toml";
pub const DEFAULT_STORAGE_FILE: &str = "quiz_storage.txt";

pub const STORAGE_ENV: &str = "QUIZ_FORGE_STORAGE";
pub const LOG_FILE_ENV: &str = "QUIZ_FORGE_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Flat text file holding the questions.
    pub storage_path: PathBuf,
    /// Where logs go while a full-screen view is open.
    pub log_file: Option<PathBuf>,
    /// Fixed shuffle seed, for repeatable quiz order.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_FILE),
            log_file: None,
            seed: None,
        }
    }
}

impl Config {
    /// Load `path` if given (it must exist), else [`DEFAULT_CONFIG_FILE`]
    /// if present, else defaults; then apply the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override from environment variables, looked up through `var`.
    pub fn with_env<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = var(STORAGE_ENV).filter(|v| !v.is_empty()) {
            self.storage_path = PathBuf::from(path);
        }
        if let Some(path) = var(LOG_FILE_ENV).filter(|v| !v.is_empty()) {
            self.log_file = Some(PathBuf::from(path));
        }
        self
    }
}
