//! Record source trait for loading the installer set

use crate::core::error::DirectoryError;
use crate::core::installer::Installer;
use async_trait::async_trait;

/// Where installer records come from
///
/// Sources are read once at startup; the loaded set is then treated as
/// immutable for the life of the process. Implementations should return the
/// records in their natural (file or insertion) order, since that order is
/// what stable sorts fall back to on ties.
#[async_trait]
pub trait InstallerSource: Send + Sync {
    /// Short name used in logs and load errors
    fn describe(&self) -> String;

    /// Load every record
    async fn load(&self) -> Result<Vec<Installer>, DirectoryError>;
}
