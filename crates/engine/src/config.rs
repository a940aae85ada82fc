//! Facade configuration via `starfire.toml`
//!
//! ```toml
//! # Collection holding the key-value documents
//! collection = "kv"
//!
//! # Hierarchical separator in logical keys (default "/")
//! separator = "/"
//!
//! # Reserved delimiter used in document ids (default ":")
//! delimiter = ":"
//! ```

use serde::{Deserialize, Serialize};
use starfire_core::{Error, KeyCodec, Result, DEFAULT_DELIMITER, DEFAULT_SEPARATOR};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "starfire.toml";

/// Facade configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarfireConfig {
    /// Collection path, must not be blank
    pub collection: String,
    /// Separator in logical keys
    #[serde(default = "default_separator")]
    pub separator: char,
    /// Reserved delimiter in storage identifiers
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl StarfireConfig {
    /// Default codec pair for `collection`
    pub fn new(collection: impl Into<String>) -> Self {
        StarfireConfig {
            collection: collection.into(),
            separator: DEFAULT_SEPARATOR,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Check the collection path and build the key codec
    pub fn validate(&self) -> Result<KeyCodec> {
        validate_collection(&self.collection)?;
        KeyCodec::new(self.separator, self.delimiter).map_err(|e| Error::Config(e.to_string()))
    }

    /// Parse from TOML text and validate
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StarfireConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML and write to `path`
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Reject blank collection paths
pub(crate) fn validate_collection(collection: &str) -> Result<()> {
    if collection.trim().is_empty() {
        return Err(Error::Config(
            "The database path (collection) is missing or invalid.".to_string(),
        ));
    }
    Ok(())
}
