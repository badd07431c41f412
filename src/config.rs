//! Configuration management for pagetalk.
//!
//! Holds the document library (logical name -> PDF path), the chunk size,
//! and the model id. Selecting a name that is not in the library is an
//! explicit error; there is no fallback document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::chunking::DEFAULT_CHUNK_SIZE;
use crate::error::Error;

/// Default Cohere model for chat.
pub const DEFAULT_MODEL: &str = "command-r";

/// pagetalk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Version of config schema (for future migrations)
    #[serde(default = "default_version")]
    pub version: u32,
    /// Snippet size in characters for the document chunker
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Cohere model id used for chat
    #[serde(default = "default_model")]
    pub model: String,
    /// Document library: logical name -> PDF path
    #[serde(default)]
    pub documents: BTreeMap<String, String>,
}

fn default_version() -> u32 {
    1
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
            model: DEFAULT_MODEL.to_string(),
            documents: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.pagetalk/config.toml)
    pub fn path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(".pagetalk").join("config.toml"))
    }

    /// Load config from disk, or return None if it doesn't exist
    pub fn load() -> Result<Option<Self>> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(Some(config))
    }

    /// Load config from disk, falling back to defaults on first run
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load()?.unwrap_or_default())
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Look up the file path for a logical document name.
    ///
    /// Unknown names fail with [`Error::InvalidSelection`] listing the
    /// configured names.
    pub fn resolve(&self, name: &str) -> std::result::Result<&str, Error> {
        self.documents
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::InvalidSelection {
                name: name.to_string(),
                known: self.documents.keys().cloned().collect(),
            })
    }

    /// Startup validation: the chunk size is positive and every mapped
    /// document path exists.
    pub fn validate(&self) -> std::result::Result<(), Error> {
        if self.chunk_size == 0 {
            return Err(Error::Config("chunk_size must be positive".into()));
        }

        for (name, path) in &self.documents {
            if !Path::new(path).exists() {
                return Err(Error::Config(format!(
                    "document '{}' points to missing file {}",
                    name, path
                )));
            }
        }

        Ok(())
    }
}
