//! Tool configuration
//!
//! Read from an explicit path or from ~/.merkle-audit/config.toml

use crate::chunk::{ChunkConfig, DEFAULT_CHUNK_SIZE};
use crate::core::error::{MerkleError, Result};
use crate::core::types::PairEncoding;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Chunk size in bytes
    pub chunk_size: usize,
    /// Pair encoding for new trees
    pub encoding: PairEncoding,
    /// Tracing filter directive, e.g. "merkle_audit=debug"
    pub log_filter: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            encoding: PairEncoding::Raw,
            log_filter: None,
        }
    }
}

impl AuditConfig {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one the default file is used
    /// when present, otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = Self::default_path()?;
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(&config_path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AuditConfig = toml::from_str(content)
            .map_err(|e| MerkleError::configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MerkleError::configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path of the per-user configuration file
    pub fn default_path() -> Result<PathBuf> {
        let user_dirs = UserDirs::new().ok_or(MerkleError::HomeDirectoryNotFound)?;
        Ok(user_dirs.home_dir().join(".merkle-audit").join("config.toml"))
    }

    pub fn chunk_config(&self) -> ChunkConfig {
        ChunkConfig {
            chunk_size: self.chunk_size,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(MerkleError::InvalidChunkSize { size: 0 });
        }
        Ok(())
    }
}
