// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Page requests and page results
//!
//! A [`PageRequest`] describes one page of a larger result: a zero-based
//! page number, a positive page size and an ordered list of sort terms.
//! The pagination rewriter consumes it to compute skip/limit values; a
//! completed paged execution bundles the mapped items with the originating
//! request and the total matching-element count into a [`Page`].

use crate::error::{GremlinError, Result};
use serde::{Deserialize, Serialize};

/// Sort direction for a single ordering term
///
/// Direction is always explicit - there is no default when unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// The traversal-language keyword for this direction
    pub fn as_gremlin(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// One (property, direction) ordering term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl SortOrder {
    /// Create an ordering term
    pub fn new(property: impl Into<String>, direction: Direction) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }

    /// Ascending order on a property
    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Ascending)
    }

    /// Descending order on a property
    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Descending)
    }
}

/// Request for one page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page_number: u64,
    page_size: u64,
    sort: Vec<SortOrder>,
}

impl PageRequest {
    /// Create a page request
    ///
    /// `page_number` is zero-based; a zero `page_size` is a configuration
    /// error.
    pub fn new(page_number: u64, page_size: u64) -> Result<Self> {
        if page_size == 0 {
            return Err(GremlinError::Configuration(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            page_number,
            page_size,
            sort: Vec::new(),
        })
    }

    /// Attach ordering terms, replacing any previously set
    pub fn with_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    /// Zero-based page number
    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    /// Page size
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Ordering terms in caller order
    pub fn sort(&self) -> &[SortOrder] {
        &self.sort
    }

    /// Number of elements to skip: `page_number * page_size`
    pub fn offset(&self) -> u64 {
        self.page_number * self.page_size
    }

    /// Maximum number of elements on the page
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

/// One page of mapped entities plus the total matching-element count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    page_number: u64,
    page_size: u64,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Bundle a page's items with its originating request and total count
    pub fn new(items: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            items,
            page_number: request.page_number(),
            page_size: request.page_size(),
            total_elements,
        }
    }

    /// The page's items
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page and take its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Zero-based page number of this page
    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    /// Requested page size
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Total number of matching elements across all pages
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Total page count, derived by ceiling division
    pub fn total_pages(&self) -> u64 {
        // page_size > 0 is enforced by PageRequest::new
        (self.total_elements + self.page_size - 1) / self.page_size
    }

    /// Whether a later page exists
    pub fn has_next(&self) -> bool {
        self.page_number + 1 < self.total_pages()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_page_number_times_size() {
        let request = PageRequest::new(3, 25).unwrap();
        assert_eq!(request.offset(), 75);
        assert_eq!(request.limit(), 25);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = PageRequest::new(0, 0);
        assert!(matches!(result, Err(GremlinError::Configuration(_))));
    }

    #[test]
    fn test_total_pages_ceiling() {
        let request = PageRequest::new(0, 10).unwrap();

        let page: Page<i32> = Page::new(Vec::new(), &request, 0);
        assert_eq!(page.total_pages(), 0);

        let page: Page<i32> = Page::new(Vec::new(), &request, 10);
        assert_eq!(page.total_pages(), 1);

        let page: Page<i32> = Page::new(Vec::new(), &request, 11);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn test_has_next() {
        let request = PageRequest::new(0, 10).unwrap();
        let page: Page<i32> = Page::new(Vec::new(), &request, 25);
        assert!(page.has_next());

        let request = PageRequest::new(2, 10).unwrap();
        let page: Page<i32> = Page::new(Vec::new(), &request, 25);
        assert!(!page.has_next());
    }

    #[test]
    fn test_sort_order_preserved() {
        let request = PageRequest::new(0, 10)
            .unwrap()
            .with_sort(vec![SortOrder::asc("name"), SortOrder::desc("age")]);
        assert_eq!(request.sort()[0].property, "name");
        assert_eq!(request.sort()[0].direction, Direction::Ascending);
        assert_eq!(request.sort()[1].property, "age");
        assert_eq!(request.sort()[1].direction, Direction::Descending);
    }
}
