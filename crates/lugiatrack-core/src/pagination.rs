// ABOUTME: Offset pagination for list endpoints
// ABOUTME: Validates page parameters and wraps results in the list response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use serde::{Deserialize, Serialize};

use crate::constants::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::errors::{AppError, AppResult};

/// Validated 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Build a page request, rejecting `page < 1` and `page_size < 1`
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` when either value is below 1.
    pub fn new(page: i64, page_size: i64) -> AppResult<Self> {
        if page < 1 || page_size < 1 {
            return Err(AppError::invalid_input("Invalid pagination parameters"));
        }
        Ok(Self { page, page_size })
    }

    /// Build from optional query values, falling back to the defaults
    ///
    /// # Errors
    ///
    /// Same as [`PageRequest::new`].
    pub fn from_query(page: Option<i64>, page_size: Option<i64>) -> AppResult<Self> {
        Self::new(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Silently cap the page size
    #[must_use]
    pub fn clamp_page_size(self, max: i64) -> Self {
        Self {
            page_size: self.page_size.min(max),
            ..self
        }
    }

    /// 1-based page number
    #[must_use]
    pub const fn page(&self) -> i64 {
        self.page
    }

    /// Rows per page
    #[must_use]
    pub const fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Rows to skip
    #[must_use]
    pub const fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Rows to fetch
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.page_size
    }
}

/// List response envelope: `{page, pageSize, total, items}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// 1-based page number
    pub page: i64,
    /// Requested (possibly clamped) page size
    pub page_size: i64,
    /// Total rows across all pages
    pub total: i64,
    /// Rows on this page
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Wrap a slice of results
    #[must_use]
    pub const fn new(request: PageRequest, total: i64, items: Vec<T>) -> Self {
        Self {
            page: request.page,
            page_size: request.page_size,
            total,
            items,
        }
    }

    /// Convert every item, keeping the page metadata
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_for_first_and_later_pages() {
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 25).unwrap().offset(), 50);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(-4, -1).is_err());
    }

    #[test]
    fn test_defaults_when_query_omitted() {
        let request = PageRequest::from_query(None, None).unwrap();
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 10);
    }

    #[test]
    fn test_clamp_only_shrinks() {
        let request = PageRequest::new(2, 500).unwrap().clamp_page_size(100);
        assert_eq!(request.page_size(), 100);
        assert_eq!(request.offset(), 100);
        let small = PageRequest::new(1, 5).unwrap().clamp_page_size(100);
        assert_eq!(small.page_size(), 5);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::new(PageRequest::new(1, 10).unwrap(), 1, vec![7]);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 1, "pageSize": 10, "total": 1, "items": [7]})
        );
    }
}
