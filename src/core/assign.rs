//! Deterministic id → image assignment
//!
//! Every installer gets a stable image from a numbered pool of static files.
//! The index depends only on the id and the pool size, so the same installer
//! shows the same picture in every process and after every reload.

use crate::core::error::AssignmentError;
use serde::{Deserialize, Serialize};

/// 32-bit polynomial hash over the UTF-16 code units of `s`
///
/// `hash = hash * 31 + unit`, wrapping to the signed 32-bit range on every
/// step. Must stay bit-for-bit stable: stored image choices depend on it.
pub fn hash_code(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Map `id` to an index in `[0, pool_size)`
///
/// The absolute value is taken after widening, so `i32::MIN` maps from `2^31`.
pub fn assign(id: &str, pool_size: usize) -> Result<usize, AssignmentError> {
    if pool_size == 0 {
        return Err(AssignmentError::EmptyPool { pool: None });
    }
    let magnitude = i64::from(hash_code(id)).unsigned_abs();
    Ok((magnitude % pool_size as u64) as usize)
}

/// A numbered set of interchangeable image files
///
/// Files are named `{prefix}{n}.{extension}` with `n` starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePool {
    pub name: String,
    pub base_path: String,
    pub prefix: String,
    pub extension: String,
    pub count: usize,
}

impl ImagePool {
    pub fn new(
        name: impl Into<String>,
        base_path: impl Into<String>,
        prefix: impl Into<String>,
        extension: impl Into<String>,
        count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            base_path: base_path.into(),
            prefix: prefix.into(),
            extension: extension.into(),
            count,
        }
    }

    /// Card images shown on listing tiles (15 files)
    pub fn cards() -> Self {
        Self::new("cards", "/images/golf/cards", "golf-", "jpg", 15)
    }

    /// Hero/background images (3 files)
    pub fn hero() -> Self {
        Self::new("hero", "/images/golf/hero", "hero-", "jpg", 3)
    }

    fn empty(&self) -> AssignmentError {
        AssignmentError::EmptyPool {
            pool: Some(self.name.clone()),
        }
    }

    /// Stable pool index for an entity id
    pub fn index_for(&self, id: &str) -> Result<usize, AssignmentError> {
        assign(id, self.count).map_err(|_| self.empty())
    }

    /// Stable image path for an entity id
    pub fn path_for(&self, id: &str) -> Result<String, AssignmentError> {
        let index = self.index_for(id)?;
        Ok(self.file_path(index))
    }

    /// Path of the image at `index`, wrapping around the pool
    pub fn path_at(&self, index: usize) -> Result<String, AssignmentError> {
        if self.count == 0 {
            return Err(self.empty());
        }
        Ok(self.file_path(index % self.count))
    }

    /// Every image path in the pool, in file order
    pub fn all_paths(&self) -> Vec<String> {
        (0..self.count).map(|index| self.file_path(index)).collect()
    }

    fn file_path(&self, index: usize) -> String {
        format!(
            "{}/{}{}.{}",
            self.base_path.trim_end_matches('/'),
            self.prefix,
            index + 1,
            self.extension
        )
    }
}
