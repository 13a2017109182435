//! Installer sources and the immutable catalog built from them

pub mod catalog;
pub mod file;
pub mod in_memory;

pub use catalog::Catalog;
pub use file::FileSource;
pub use in_memory::InMemorySource;
