//! Portfolio gallery navigation

use crate::core::error::GalleryError;

/// Position within an installer's portfolio images
///
/// `next` and `prev` wrap around at either end. An empty gallery has no
/// current image and navigation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    len: usize,
    index: usize,
}

impl GalleryCursor {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the image on display, `None` for an empty gallery
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    pub fn prev(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        Some(self.index)
    }

    /// Jump straight to an image, e.g. from a thumbnail strip
    pub fn select(&mut self, index: usize) -> Result<usize, GalleryError> {
        if index >= self.len {
            return Err(GalleryError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(index)
    }
}
