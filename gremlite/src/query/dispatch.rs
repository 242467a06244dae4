// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Strategy selection and per-method orchestration
//!
//! [`GremlinRepositoryQuery`] is the entry point built once per repository
//! method: it owns the parsed metadata plus shared client/operations
//! handles. Each invocation resolves parameters, selects the applicable
//! execution strategy (pure logic, no I/O) and runs it.
//! [`CriteriaQuery`] is the equivalent entry point for derived methods
//! that carry no template.

use crate::client::GremlinClient;
use crate::error::Result;
use crate::query::criteria::Criteria;
use crate::query::execution::{find_by_criteria, QueryExecution, QueryOutput};
use crate::query::method::{QueryMethod, ReturnShape};
use crate::query::params::{resolve_parameters, ParameterAccessor};
use crate::query::GremlinQuery;
use crate::query::operations::GremlinOperations;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Executable form of one templated repository method
pub struct GremlinRepositoryQuery<C, O> {
    method: QueryMethod,
    client: Arc<C>,
    operations: Arc<O>,
}

impl<C, O> GremlinRepositoryQuery<C, O>
where
    C: GremlinClient,
    O: GremlinOperations,
{
    /// Bind parsed method metadata to client and operations handles
    pub fn new(method: QueryMethod, client: Arc<C>, operations: Arc<O>) -> Self {
        Self {
            method,
            client,
            operations,
        }
    }

    /// The method's parsed metadata
    pub fn method(&self) -> &QueryMethod {
        &self.method
    }

    /// Execute one invocation of the method
    pub async fn execute<T>(&self, accessor: &ParameterAccessor) -> Result<QueryOutput<T>>
    where
        T: DeserializeOwned + Send,
    {
        let params = resolve_parameters(self.method.parameters(), accessor.arguments());
        let query = GremlinQuery::from_template(self.method.template(), params);

        let execution = self.execution_for(accessor)?;
        execution.execute(&query, self.method.shape()).await
    }

    /// Select the applicable execution strategy
    ///
    /// Pure selection logic; performs no I/O. A paged method without a
    /// page request on the accessor is rejected here, before anything is
    /// submitted.
    fn execution_for<'a>(
        &'a self,
        accessor: &'a ParameterAccessor,
    ) -> Result<QueryExecution<'a, C, O>> {
        if self.method.is_page_query() {
            let page = accessor.page_request()?;
            log::debug!(
                "dispatching '{}' to page-submit (page {}, size {})",
                self.method.name(),
                page.page_number(),
                page.page_size()
            );
            return Ok(QueryExecution::PageSubmit {
                client: self.client.as_ref(),
                operations: self.operations.as_ref(),
                page,
            });
        }

        Ok(QueryExecution::Submit {
            client: self.client.as_ref(),
            operations: self.operations.as_ref(),
        })
    }
}

/// Executable form of one derived (criteria) repository method
pub struct CriteriaQuery<O> {
    operations: Arc<O>,
    shape: ReturnShape,
}

impl<O: GremlinOperations> CriteriaQuery<O> {
    /// Bind a declared return shape to an operations handle
    pub fn new(operations: Arc<O>, shape: ReturnShape) -> Self {
        Self { operations, shape }
    }

    /// Execute one invocation against a criteria tree
    pub async fn execute<T>(&self, criteria: &Criteria) -> Result<QueryOutput<T>>
    where
        T: DeserializeOwned + Send,
    {
        find_by_criteria(self.operations.as_ref(), criteria, self.shape).await
    }
}
