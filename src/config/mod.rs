//! Configuration loading and management

use crate::core::assign::ImagePool;
use crate::core::error::ConfigError;
use crate::core::query::SortKey;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Image pools owned by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "ImagePool::cards")]
    pub cards: ImagePool,

    #[serde(default = "ImagePool::hero")]
    pub hero: ImagePool,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            cards: ImagePool::cards(),
            hero: ImagePool::hero(),
        }
    }
}

/// Query defaults applied when a request leaves a parameter out
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub default_sort: SortKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Installer records file (YAML or JSON)
    #[serde(default = "default_installers_path")]
    pub installers: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            installers: default_installers_path(),
        }
    }
}

fn default_installers_path() -> PathBuf {
    PathBuf::from("data/installers.yaml")
}

/// Complete configuration for the directory
///
/// Every section is optional; missing sections take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub data: DataConfig,
}

impl DirectoryConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded directory config");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot: positive pool sizes and a bind address
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pool in [&self.images.cards, &self.images.hero] {
            if pool.count == 0 {
                return Err(ConfigError::InvalidValue {
                    field: format!("images.{}.count", pool.name),
                    value: pool.count.to_string(),
                    message: "image pools need at least one file".to_string(),
                });
            }
        }
        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.bind".to_string(),
                value: self.server.bind.clone(),
                message: "bind address must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self::default()
    }
}
