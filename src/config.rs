//! Configuration for the layout composer

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration options for layout composition
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Extension appended to a declared layout path that has none
    pub default_extension: String,

    /// Directory prepended to a relative initial template path
    ///
    /// Declared layout paths are unaffected; those always resolve relative
    /// to the template that declared them.
    pub views_dir: Option<PathBuf>,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            default_extension: "jinja".to_string(),
            views_dir: None,
        }
    }
}

impl ComposeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extension appended to extension-less layout paths
    pub fn with_default_extension(mut self, extension: impl Into<String>) -> Self {
        self.default_extension = extension.into();
        self
    }

    /// Set the directory relative initial template paths resolve under
    pub fn with_views_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.views_dir = Some(dir.into());
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
