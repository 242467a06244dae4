// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Execution strategies
//!
//! Three strategies cover every repository method: **Submit** for plain
//! templated queries, **PageSubmit** for paged templated queries and
//! **Find** for criteria-derived queries. Each submits (or delegates) and
//! then shapes the result according to the method's declared
//! [`ReturnShape`]. Strategies hold no state across invocations.

use crate::client::{GremlinClient, ResultBatch};
use crate::error::{GremlinError, Result};
use crate::query::criteria::Criteria;
use crate::query::method::ReturnShape;
use crate::query::operations::GremlinOperations;
use crate::query::page::{Page, PageRequest};
use crate::query::GremlinQuery;
use serde::de::DeserializeOwned;

/// Shaped output of one query execution
#[derive(Debug)]
pub enum QueryOutput<T> {
    /// At most one entity, for scalar-entity methods
    Entity(Option<T>),
    /// All mapped entities, possibly empty
    Entities(Vec<T>),
    /// One page of entities with the total matching-element count
    Page(Page<T>),
    /// The raw result batch, unmapped
    Raw(ResultBatch),
}

impl<T> QueryOutput<T> {
    /// Unwrap an entity-list output
    pub fn into_entities(self) -> Result<Vec<T>> {
        match self {
            QueryOutput::Entities(entities) => Ok(entities),
            other => Err(GremlinError::UnsupportedShape(format!(
                "expected an entity list, got {}",
                other.shape_name()
            ))),
        }
    }

    /// Unwrap a scalar-entity output
    pub fn into_entity(self) -> Result<Option<T>> {
        match self {
            QueryOutput::Entity(entity) => Ok(entity),
            other => Err(GremlinError::UnsupportedShape(format!(
                "expected a single entity, got {}",
                other.shape_name()
            ))),
        }
    }

    /// Unwrap a page output
    pub fn into_page(self) -> Result<Page<T>> {
        match self {
            QueryOutput::Page(page) => Ok(page),
            other => Err(GremlinError::UnsupportedShape(format!(
                "expected a page, got {}",
                other.shape_name()
            ))),
        }
    }

    /// Unwrap a raw-batch output
    pub fn into_raw(self) -> Result<ResultBatch> {
        match self {
            QueryOutput::Raw(batch) => Ok(batch),
            other => Err(GremlinError::UnsupportedShape(format!(
                "expected the raw result batch, got {}",
                other.shape_name()
            ))),
        }
    }

    fn shape_name(&self) -> &'static str {
        match self {
            QueryOutput::Entity(_) => "a single entity",
            QueryOutput::Entities(_) => "an entity list",
            QueryOutput::Page(_) => "a page",
            QueryOutput::Raw(_) => "the raw result batch",
        }
    }
}

/// The strategy selected for one invocation
///
/// Borrowed handles only; constructing a strategy performs no I/O.
pub enum QueryExecution<'a, C, O> {
    /// Submit the template verbatim
    Submit { client: &'a C, operations: &'a O },
    /// Rewrite for pagination, then coordinate data and count round-trips
    PageSubmit {
        client: &'a C,
        operations: &'a O,
        page: &'a PageRequest,
    },
    /// Delegate a criteria query to the operations collaborator
    Find { operations: &'a O },
}

impl<C, O> QueryExecution<'_, C, O>
where
    C: GremlinClient,
    O: GremlinOperations,
{
    /// Run the strategy and shape the result
    pub async fn execute<T>(&self, query: &GremlinQuery<'_>, shape: ReturnShape) -> Result<QueryOutput<T>>
    where
        T: DeserializeOwned + Send,
    {
        match self {
            QueryExecution::Submit { client, operations } => {
                execute_submit(*client, *operations, query, shape).await
            }
            QueryExecution::PageSubmit {
                client,
                operations,
                page,
            } => execute_page_submit(*client, *operations, *page, query, shape).await,
            QueryExecution::Find { operations } => {
                let criteria = match query {
                    GremlinQuery::Criteria(criteria) => criteria,
                    GremlinQuery::Template { .. } => {
                        return Err(GremlinError::Configuration(
                            "templated query dispatched to the find execution".to_string(),
                        ))
                    }
                };
                find_by_criteria(*operations, criteria, shape).await
            }
        }
    }
}

async fn execute_submit<C, O, T>(
    client: &C,
    operations: &O,
    query: &GremlinQuery<'_>,
    shape: ReturnShape,
) -> Result<QueryOutput<T>>
where
    C: GremlinClient,
    O: GremlinOperations,
    T: DeserializeOwned + Send,
{
    let (template, params) = query.template_and_params()?;

    let batch = client.submit(template.traversal(), params).await?;

    if shape == ReturnShape::RawResultBatch {
        return Ok(QueryOutput::Raw(batch));
    }

    let entities = operations.map_rows::<T>(&batch)?;
    shape_entities(entities, shape)
}

async fn execute_page_submit<C, O, T>(
    client: &C,
    operations: &O,
    page: &PageRequest,
    query: &GremlinQuery<'_>,
    shape: ReturnShape,
) -> Result<QueryOutput<T>>
where
    C: GremlinClient,
    O: GremlinOperations,
    T: DeserializeOwned + Send,
{
    let (template, params) = query.template_and_params()?;

    // Contract checks come first: no remote call may happen on a
    // misconfigured method.
    let count_traversal = template.count_traversal()?;
    if shape != ReturnShape::Page {
        return Err(GremlinError::Configuration(format!(
            "paged execution requires the page return shape, found {:?}",
            shape
        )));
    }

    // Only the data submission carries the skip/limit bindings; the count
    // submission sees the caller's parameters untouched.
    let mut data_params = params.clone();
    let data_traversal = template.page_traversal(page, &mut data_params)?;

    // Independent round-trips, joined before any page is built. A page is
    // never produced with data but a missing count, or vice versa.
    let (data, count) = tokio::join!(
        client.submit(&data_traversal, &data_params),
        client.submit(count_traversal, params),
    );
    let data = data?;
    let count = count?;

    let total = match count.first() {
        None => 0,
        Some(row) => row.as_i64().ok_or_else(|| {
            GremlinError::Mapping("count query did not return a numeric scalar".to_string())
        })?,
    };

    let entities = operations.map_rows::<T>(&data)?;
    Ok(QueryOutput::Page(Page::new(
        entities,
        page,
        total.max(0) as u64,
    )))
}

/// Delegate a criteria query and shape its entity list
///
/// Structurally identical to Submit's shaping contract; the raw result
/// batch is not reachable through the operations collaborator.
pub(crate) async fn find_by_criteria<O, T>(
    operations: &O,
    criteria: &Criteria,
    shape: ReturnShape,
) -> Result<QueryOutput<T>>
where
    O: GremlinOperations,
    T: DeserializeOwned + Send,
{
    if shape == ReturnShape::RawResultBatch {
        return Err(GremlinError::Configuration(
            "criteria queries cannot return the raw result batch".to_string(),
        ));
    }

    let entities = operations.find::<T>(criteria).await?;
    shape_entities(entities, shape)
}

fn shape_entities<T>(mut entities: Vec<T>, shape: ReturnShape) -> Result<QueryOutput<T>> {
    match shape {
        ReturnShape::ScalarEntity => match entities.len() {
            0 => Ok(QueryOutput::Entity(None)),
            1 => Ok(QueryOutput::Entity(entities.pop())),
            n => Err(GremlinError::UnsupportedShape(format!(
                "scalar entity method matched {} rows",
                n
            ))),
        },
        ReturnShape::EntityList => Ok(QueryOutput::Entities(entities)),
        ReturnShape::Page => Err(GremlinError::Configuration(
            "page return shape requires a paged execution".to_string(),
        )),
        ReturnShape::RawResultBatch => Err(GremlinError::UnsupportedShape(
            "raw result batch cannot be rebuilt from mapped entities".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_scalar_entity() {
        let out: QueryOutput<i32> = shape_entities(vec![7], ReturnShape::ScalarEntity).unwrap();
        assert_eq!(out.into_entity().unwrap(), Some(7));

        let out: QueryOutput<i32> = shape_entities(vec![], ReturnShape::ScalarEntity).unwrap();
        assert_eq!(out.into_entity().unwrap(), None);

        let result: Result<QueryOutput<i32>> =
            shape_entities(vec![1, 2], ReturnShape::ScalarEntity);
        assert!(matches!(result, Err(GremlinError::UnsupportedShape(_))));
    }

    #[test]
    fn test_shape_entity_list_keeps_empty_list() {
        let out: QueryOutput<i32> = shape_entities(vec![], ReturnShape::EntityList).unwrap();
        assert!(out.into_entities().unwrap().is_empty());
    }

    #[test]
    fn test_page_shape_rejected_outside_paged_execution() {
        let result: Result<QueryOutput<i32>> = shape_entities(vec![1], ReturnShape::Page);
        assert!(matches!(result, Err(GremlinError::Configuration(_))));
    }
}
