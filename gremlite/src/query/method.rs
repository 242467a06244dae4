// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Repository-method metadata
//!
//! Declarative metadata is parsed exactly once at repository initialization
//! into an immutable [`QueryMethod`]; nothing is re-derived per call. The
//! declared return shape is resolved here into a closed [`ReturnShape`]
//! variant instead of being inspected dynamically at execution time, and
//! every invalid configuration is rejected before the first invocation.

use crate::error::{GremlinError, Result};
use crate::query::params::ParameterDescriptor;
use crate::query::template::QueryTemplate;
use serde::{Deserialize, Serialize};

/// Declared return shape of a repository method
///
/// Resolved once at metadata-parsing time and carried on the method
/// descriptor; execution strategies branch on this, never on runtime types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnShape {
    /// A single entity (at most one matching row)
    ScalarEntity,
    /// A list of entities, possibly empty
    EntityList,
    /// One page of entities plus the total matching-element count
    Page,
    /// The raw result batch, unmapped
    RawResultBatch,
}

/// Declarative query configuration attached to a repository method
///
/// `value` is the primary traversal template and is always required;
/// `count_query` is required only for paged queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDeclaration {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_query: Option<String>,
}

impl QueryDeclaration {
    /// Declare a traversal template
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            count_query: None,
        }
    }

    /// Declare the count template alongside the traversal template
    pub fn with_count_query(mut self, count_query: impl Into<String>) -> Self {
        self.count_query = Some(count_query.into());
        self
    }
}

/// Immutable, parse-once descriptor of one repository method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMethod {
    name: String,
    template: QueryTemplate,
    shape: ReturnShape,
    parameters: Vec<ParameterDescriptor>,
    pageable: bool,
}

impl QueryMethod {
    /// Parse declarative metadata into a validated method descriptor
    ///
    /// Fails fast on every configuration that could otherwise only blow up
    /// mid-invocation: an empty template, a paged method without a count
    /// template, a paged method declared to return the raw result batch,
    /// and a page return shape on a method without a pageable parameter.
    pub fn parse(
        name: impl Into<String>,
        declaration: QueryDeclaration,
        shape: ReturnShape,
        parameters: Vec<ParameterDescriptor>,
        pageable: bool,
    ) -> Result<Self> {
        let name = name.into();

        if declaration.value.trim().is_empty() {
            return Err(GremlinError::Configuration(format!(
                "query template on method '{}' is empty",
                name
            )));
        }

        let mut template = QueryTemplate::new(declaration.value);
        if let Some(count_query) = declaration.count_query {
            template = template.with_count_query(count_query);
        }

        if pageable && !template.has_count_query() {
            return Err(GremlinError::Configuration(format!(
                "paged method '{}' declares no count template",
                name
            )));
        }

        if pageable && shape == ReturnShape::RawResultBatch {
            return Err(GremlinError::Configuration(format!(
                "paged method '{}' cannot return the raw result batch",
                name
            )));
        }

        if shape == ReturnShape::Page && !pageable {
            return Err(GremlinError::Configuration(format!(
                "method '{}' returns a page but declares no pageable parameter",
                name
            )));
        }

        Ok(Self {
            name,
            template,
            shape,
            parameters,
            pageable,
        })
    }

    /// Method name, for diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed traversal template
    pub fn template(&self) -> &QueryTemplate {
        &self.template
    }

    /// Declared return shape
    pub fn shape(&self) -> ReturnShape {
        self.shape
    }

    /// Declared parameter descriptors
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Whether the method declares a pageable parameter
    pub fn is_page_query(&self) -> bool {
        self.pageable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration() -> QueryDeclaration {
        QueryDeclaration::new("g.V().hasLabel('person')")
    }

    #[test]
    fn test_parse_plain_method() {
        let method = QueryMethod::parse(
            "find_all",
            declaration(),
            ReturnShape::EntityList,
            Vec::new(),
            false,
        )
        .unwrap();
        assert_eq!(method.name(), "find_all");
        assert!(!method.is_page_query());
        assert_eq!(method.shape(), ReturnShape::EntityList);
    }

    #[test]
    fn test_parse_paged_method() {
        let method = QueryMethod::parse(
            "find_page",
            declaration().with_count_query("g.V().hasLabel('person').count()"),
            ReturnShape::Page,
            Vec::new(),
            true,
        )
        .unwrap();
        assert!(method.is_page_query());
        assert!(method.template().has_count_query());
    }

    #[test]
    fn test_empty_template_rejected() {
        let result = QueryMethod::parse(
            "broken",
            QueryDeclaration::new("  "),
            ReturnShape::EntityList,
            Vec::new(),
            false,
        );
        assert!(matches!(result, Err(GremlinError::Configuration(_))));
    }

    #[test]
    fn test_paged_without_count_template_rejected() {
        let result = QueryMethod::parse(
            "find_page",
            declaration(),
            ReturnShape::Page,
            Vec::new(),
            true,
        );
        assert!(matches!(result, Err(GremlinError::Configuration(_))));
    }

    #[test]
    fn test_paged_raw_batch_rejected() {
        let result = QueryMethod::parse(
            "find_page_raw",
            declaration().with_count_query("g.V().count()"),
            ReturnShape::RawResultBatch,
            Vec::new(),
            true,
        );
        assert!(matches!(result, Err(GremlinError::Configuration(_))));
    }

    #[test]
    fn test_page_shape_without_pageable_rejected() {
        let result = QueryMethod::parse(
            "find_page",
            declaration().with_count_query("g.V().count()"),
            ReturnShape::Page,
            Vec::new(),
            false,
        );
        assert!(matches!(result, Err(GremlinError::Configuration(_))));
    }
}
