//! Page requests against the platform's paging API.

use crate::{Error, Result};
use serde::Serialize;

/// A request for one page of a collection.
///
/// Within one scan the size stays fixed and the index only ever advances
/// by one, see [`PageRequest::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    index: u32,
    size: u32,
}

impl PageRequest {
    /// Creates a page request. A size of zero is rejected.
    pub fn new(index: u32, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidPageRequest("page size must be positive".to_string()));
        }
        Ok(Self { index, size })
    }

    /// The first page of a scan.
    pub fn first(size: u32) -> Result<Self> {
        Self::new(0, size)
    }

    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Offset of the first record on this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.index as u64 * self.size as u64
    }

    /// The request for the following page, same size.
    pub fn next(&self) -> Result<Self> {
        let index = self
            .index
            .checked_add(1)
            .ok_or_else(|| Error::InvalidPageRequest("page index overflow".to_string()))?;
        Ok(Self {
            index,
            size: self.size,
        })
    }
}
