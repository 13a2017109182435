//! Immutable installer catalog

use crate::core::InstallerSource;
use crate::core::error::{CatalogError, DirectoryError};
use crate::core::installer::Installer;
use crate::core::query::{self, QueryState};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// The installer set for a session
///
/// Built once, validated at ingestion, then shared read-only. Cloning is
/// cheap: records live behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Arc<[Installer]>,
    by_id: Arc<HashMap<String, usize>>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed records and duplicate ids
    pub fn from_records(records: Vec<Installer>) -> Result<Self, DirectoryError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (position, installer) in records.iter().enumerate() {
            installer.check()?;
            if by_id.insert(installer.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: installer.id.clone(),
                }
                .into());
            }
        }
        Ok(Self {
            records: records.into(),
            by_id: Arc::new(by_id),
        })
    }

    /// Load and validate every record from a source
    pub async fn load(source: &dyn InstallerSource) -> Result<Self, DirectoryError> {
        let records = source.load().await?;
        let catalog = Self::from_records(records)?;
        tracing::info!(
            source = %source.describe(),
            count = catalog.len(),
            "installer catalog loaded"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in load order
    pub fn all(&self) -> &[Installer] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Result<&Installer, CatalogError> {
        self.by_id
            .get(id)
            .map(|&position| &self.records[position])
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Distinct cities, sorted, for the city filter options
    pub fn cities(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|installer| installer.city.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Run the filter → sort pipeline over the whole catalog
    pub fn query(&self, state: &QueryState) -> Vec<Installer> {
        let view = query::apply(&self.records, state);
        tracing::debug!(
            total = view.len(),
            sort = %state.sort_key,
            active_filters = state.active_filter_count(),
            "catalog query"
        );
        view
    }
}
