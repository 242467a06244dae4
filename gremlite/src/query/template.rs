// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Traversal templates and pagination rewriting
//!
//! A [`QueryTemplate`] owns the raw traversal template declared on a
//! repository method, plus the optional count template used by paged
//! queries. Templates are immutable once parsed; pagination rewriting
//! always produces a new string so the same template serves every request.

use crate::error::{GremlinError, Result};
use crate::query::page::PageRequest;
use crate::query::params::ParameterMap;
use serde_json::Value;

/// Reserved binding key for the pagination offset
pub const SKIP_PARAM: &str = "skipNumber";

/// Reserved binding key for the page size
pub const LIMIT_PARAM: &str = "limitNumber";

/// Skip/limit suffix appended to a paginated traversal
///
/// The numeric values travel as parameter bindings rather than inlined
/// literals, so the driver can cache the traversal and numeric input can
/// never alter the query text.
const SKIP_LIMIT_SUFFIX: &str = ".skip(skipNumber).limit(limitNumber)";

/// Ordering placeholder a template may carry with no explicit sort terms
const ORDER_SENTINEL: &str = "order().by()";

/// A parameterized traversal template with an optional count template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate {
    value: String,
    count_query: Option<String>,
}

impl QueryTemplate {
    /// Create a template from the declared traversal string
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            count_query: None,
        }
    }

    /// Attach the count template required for paged execution
    pub fn with_count_query(mut self, count_query: impl Into<String>) -> Self {
        self.count_query = Some(count_query.into());
        self
    }

    /// The raw traversal template, verbatim
    pub fn traversal(&self) -> &str {
        &self.value
    }

    /// Whether a count template was declared
    pub fn has_count_query(&self) -> bool {
        self.count_query.as_deref().is_some_and(|q| !q.is_empty())
    }

    /// The count template of a paged query
    ///
    /// Absence is a contract violation, not a silent default.
    pub fn count_traversal(&self) -> Result<&str> {
        match self.count_query.as_deref() {
            Some(count) if !count.is_empty() => Ok(count),
            _ => Err(GremlinError::Configuration(
                "paged query requires a count template".to_string(),
            )),
        }
    }

    /// Rewrite the template to return a single page of results
    ///
    /// Strips a trailing statement terminator, expands the ordering
    /// sentinel if present, appends the skip/limit suffix and records the
    /// computed skip and limit into `params` under the reserved keys.
    /// The template itself is never mutated.
    pub fn page_traversal(&self, page: &PageRequest, params: &mut ParameterMap) -> Result<String> {
        let trimmed = self.value.strip_suffix(';').unwrap_or(&self.value);
        let ordered = expand_order_by(trimmed, page)?;

        params.insert(SKIP_PARAM.to_string(), Value::from(page.offset()));
        params.insert(LIMIT_PARAM.to_string(), Value::from(page.limit()));

        let traversal = format!("{}{}", ordered, SKIP_LIMIT_SUFFIX);
        log::debug!(
            "rewrote template for page {} (size {}): {}",
            page.page_number(),
            page.page_size(),
            traversal
        );
        Ok(traversal)
    }
}

/// Replace the ordering sentinel with one `by(property, direction)` clause
/// per sort term, in caller order
///
/// A template without the sentinel is returned unchanged - pagination must
/// not force a sort where none was requested.
fn expand_order_by(traversal: &str, page: &PageRequest) -> Result<String> {
    if !traversal.contains(ORDER_SENTINEL) {
        return Ok(traversal.to_string());
    }

    if page.sort().is_empty() {
        return Err(GremlinError::Configuration(
            "template declares an ordering placeholder but the page request carries no sort terms"
                .to_string(),
        ));
    }

    let clauses: Vec<String> = page
        .sort()
        .iter()
        .map(|order| format!("by('{}', {})", order.property, order.direction.as_gremlin()))
        .collect();

    Ok(traversal.replace(
        ORDER_SENTINEL,
        &format!("order().{}", clauses.join(".")),
    ))
}
