// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Operations collaborator and its standard implementation
//!
//! [`GremlinOperations`] is the capability surface execution strategies
//! depend on: row mapping plus criteria-based finds. [`GremlinTemplate`]
//! is the standard implementation, backed by a remote client and the
//! serde-based row conversion.

use crate::client::GremlinClient;
use crate::conversion::{deserialize_rows, RowMapper};
use crate::error::{GremlinError, Result};
use crate::query::criteria::{Criteria, CriteriaKind};
use crate::client::ResultBatch;
use crate::query::params::ParameterMap;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Operations any execution strategy may delegate to
///
/// Extends [`RowMapper`] so that strategies depend on the mapping
/// capability rather than on a concrete operations type.
#[async_trait]
pub trait GremlinOperations: RowMapper {
    /// Execute a criteria-derived query and map the result rows
    async fn find<T>(&self, criteria: &Criteria) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send;
}

/// Standard operations implementation backed by a remote client
///
/// Renders criteria into parameterized traversals (values travel as
/// bindings `p0`, `p1`, ... - never inlined literals) and maps result rows
/// through serde.
pub struct GremlinTemplate<C> {
    client: Arc<C>,
}

impl<C> GremlinTemplate<C> {
    /// Create a template over a shared client handle
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

impl<C: Send + Sync> RowMapper for GremlinTemplate<C> {
    fn map_rows<T: DeserializeOwned>(&self, batch: &ResultBatch) -> Result<Vec<T>> {
        deserialize_rows(batch)
    }
}

#[async_trait]
impl<C: GremlinClient> GremlinOperations for GremlinTemplate<C> {
    async fn find<T>(&self, criteria: &Criteria) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let mut params = ParameterMap::new();
        let traversal = render_criteria(criteria, &mut params)?;
        log::debug!("derived traversal from criteria: {}", traversal);

        let batch = self.client.submit(&traversal, &params).await?;
        self.map_rows(&batch)
    }
}

/// Render a criteria tree into a vertex traversal
fn render_criteria(criteria: &Criteria, params: &mut ParameterMap) -> Result<String> {
    let mut traversal = String::from("g.V()");
    render_steps(criteria, &mut traversal, params)?;
    Ok(traversal)
}

fn render_steps(criteria: &Criteria, out: &mut String, params: &mut ParameterMap) -> Result<()> {
    match criteria.kind() {
        CriteriaKind::IsEqual => {
            let subject = leaf_subject(criteria)?;
            let value = criteria.values().first().cloned().ok_or_else(|| {
                GremlinError::Configuration(format!(
                    "equality criterion on '{}' carries no value",
                    subject
                ))
            })?;
            let binding = format!("p{}", params.len());
            out.push_str(&format!(".has('{}', {})", subject, binding));
            params.insert(binding, value);
        }
        CriteriaKind::Exists => {
            let subject = leaf_subject(criteria)?;
            out.push_str(&format!(".has('{}')", subject));
        }
        CriteriaKind::And => {
            // conjunction is just chained filter steps
            for sub in criteria.sub_criteria() {
                render_steps(sub, out, params)?;
            }
        }
        CriteriaKind::Or => {
            let mut branches = Vec::with_capacity(criteria.sub_criteria().len());
            for sub in criteria.sub_criteria() {
                let mut branch = String::from("__");
                render_steps(sub, &mut branch, params)?;
                branches.push(branch);
            }
            out.push_str(&format!(".or({})", branches.join(", ")));
        }
    }
    Ok(())
}

fn leaf_subject(criteria: &Criteria) -> Result<&str> {
    criteria.subject().ok_or_else(|| {
        GremlinError::Configuration("leaf criterion without a subject property".to_string())
    })
}
