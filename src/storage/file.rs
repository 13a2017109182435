//! File-backed installer source (YAML or JSON)

use crate::core::InstallerSource;
use crate::core::error::{CatalogError, DirectoryError};
use crate::core::installer::Installer;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Accepted document shapes: a bare list, or a list under `installers`
#[derive(Deserialize)]
#[serde(untagged)]
enum InstallerDocument {
    List(Vec<Installer>),
    Wrapped { installers: Vec<Installer> },
}

impl InstallerDocument {
    fn into_records(self) -> Vec<Installer> {
        match self {
            InstallerDocument::List(records) => records,
            InstallerDocument::Wrapped { installers } => installers,
        }
    }
}

/// Source reading records from a static file
///
/// `.yaml` / `.yml` files are parsed as YAML, anything else as JSON.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        )
    }

    fn load_failed(&self, message: impl Into<String>) -> DirectoryError {
        CatalogError::LoadFailed {
            source_name: self.describe(),
            message: message.into(),
        }
        .into()
    }

    /// Parse a document already read into memory
    pub fn parse(&self, content: &str) -> Result<Vec<Installer>, DirectoryError> {
        let document: InstallerDocument = if self.is_yaml() {
            serde_yaml::from_str(content).map_err(|e| self.load_failed(e.to_string()))?
        } else {
            serde_json::from_str(content).map_err(|e| self.load_failed(e.to_string()))?
        };
        Ok(document.into_records())
    }
}

#[async_trait]
impl InstallerSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<Installer>, DirectoryError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.load_failed(e.to_string()))?;
        let records = self.parse(&content)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "read installer file");
        Ok(records)
    }
}
