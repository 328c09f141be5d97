//! # Paging
//!
//! Search requests carry an optional 1-based `page` and an optional `limit`.
//! [`PagingFilter`] turns them into a 0-based [`PageRequest`] for the query
//! executor, defaulting whatever is missing. Nothing here ever rejects input.

use serde::{Deserialize, Serialize};

/// Page size used when the request carries no `limit`.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Sort order requested by the caller, by record field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    #[serde(default)]
    pub direction: Direction,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

/// Page number and limit as they arrive on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PagingFilter {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self { page, limit }
    }

    /// 0-based page index. `page = 1` (or no page) is index 0.
    pub fn page_index(&self) -> u32 {
        self.page.unwrap_or(1).saturating_sub(1)
    }

    /// The requested limit, or `default_size`. Not clamped.
    pub fn page_size(&self, default_size: u32) -> u32 {
        self.limit.unwrap_or(default_size)
    }

    /// Page request using [`DEFAULT_PAGE_SIZE`].
    pub fn to_pageable(&self, sort: Option<Sort>) -> PageRequest {
        self.to_pageable_with(DEFAULT_PAGE_SIZE, sort)
    }

    /// Page request using an explicit default page size. `sort` is passed through as-is.
    pub fn to_pageable_with(&self, default_size: u32, sort: Option<Sort>) -> PageRequest {
        PageRequest {
            index: self.page_index(),
            size: self.page_size(default_size),
            sort,
        }
    }
}

/// 0-based page request consumed by the query executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub index: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

impl PageRequest {
    /// Number of items to skip. Saturates instead of overflowing on huge limits.
    pub fn offset(&self) -> usize {
        (self.index as usize).saturating_mul(self.size as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PagingFilter::default().to_pageable(None)
    }
}

/// One page of results with the metadata of the whole result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub index: u32,
    pub size: u32,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` items. A zero size yields zero pages.
    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            return 0;
        }
        self.total.div_ceil(self.size as usize)
    }

    pub fn is_last(&self) -> bool {
        (self.index as usize) + 1 >= self.total_pages()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            index: self.index,
            size: self.size,
        }
    }
}
