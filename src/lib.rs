//! # Installer Directory
//!
//! A catalog of service providers ("installers") with search, filter and sort,
//! stable image assignment, and quote requests.
//!
//! ## Features
//!
//! - **Query Pipeline**: free-text search over name, city and description,
//!   exact skill and city filters, stable sorting by name, experience or skill tier
//! - **Locale-Aware Names**: accented names sort next to their base letters
//! - **Stable Images**: each installer maps to the same file of a numbered
//!   image pool in every process
//! - **Closed Option Sets**: sort keys and skill levels are enums, unknown
//!   values are rejected instead of silently defaulted
//! - **Quote Requests**: form validation with per-field messages
//! - **REST Exposure**: optional axum router over an immutable catalog
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use directory::prelude::*;
//!
//! let installers = vec![
//!     Installer::new("installer-1", "Alpha Greens", "Austin", SkillLevel::Master, 12, ""),
//!     Installer::new("installer-2", "Beta Turf", "Boston", SkillLevel::Novice, 2, ""),
//! ];
//!
//! let query = QueryState::new()
//!     .with_search("austin")
//!     .with_sort(SortKey::ExperienceHigh);
//! let view = apply(&installers, &query);
//!
//! let image = ImagePool::cards().path_for(&view[0].id)?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        CityFilter, FilterKey, GalleryCursor, ImagePool, Installer, InstallerSource, PreferredContact,
        ProjectType, QueryParams, QueryState, QuoteForm, QuoteReceipt, QuoteRequest,
        SkillFilter, SkillLevel, SortKey, apply, assign, hash_code,
    };

    // === Errors ===
    pub use crate::core::error::{
        AssignmentError, CatalogError, ConfigError, DirectoryError, GalleryError, QueryError,
        ValidationError,
    };

    // === Storage ===
    pub use crate::storage::{Catalog, FileSource, InMemorySource};

    // === Config ===
    pub use crate::config::DirectoryConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};
}
