//! Core module containing the record model, the query pipeline and image assignment

pub mod assign;
pub mod collation;
pub mod error;
pub mod gallery;
pub mod installer;
pub mod query;
pub mod quote;
pub mod source;

pub use assign::{ImagePool, assign, hash_code};
pub use error::DirectoryError;
pub use gallery::GalleryCursor;
pub use installer::{Installer, SkillLevel};
pub use query::{CityFilter, FilterKey, QueryParams, QueryState, SkillFilter, SortKey, apply};
pub use quote::{PreferredContact, ProjectType, QuoteForm, QuoteReceipt, QuoteRequest};
pub use source::InstallerSource;
