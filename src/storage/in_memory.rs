//! In-memory installer source for testing and development

use crate::core::InstallerSource;
use crate::core::error::DirectoryError;
use crate::core::installer::Installer;
use async_trait::async_trait;

/// Source backed by a fixed vector of records
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Installer>,
}

impl InMemorySource {
    /// Create a source serving `records` in the given order
    pub fn new(records: Vec<Installer>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl InstallerSource for InMemorySource {
    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }

    async fn load(&self) -> Result<Vec<Installer>, DirectoryError> {
        Ok(self.records.clone())
    }
}
