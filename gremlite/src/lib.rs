// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Gremlite - A lightweight Gremlin repository layer for TinkerPop-compatible
//! graph databases
//!
//! Gremlite lets application code declare parameterized traversal templates
//! on repository methods and executes them against a remote graph database,
//! mapping results back into typed entities, single objects, raw result
//! batches or paginated result sets.
//!
//! # Features
//!
//! - **Declarative templates**: a traversal string plus an optional count
//!   template, parsed once at repository initialization
//! - **Pagination rewriting**: skip/limit injection with parameter bindings
//!   and ordering-sentinel expansion
//! - **Shape-driven execution**: a closed [`ReturnShape`] resolved at
//!   metadata-parsing time selects between scalar, list, page and raw
//!   results
//! - **Async remote boundary**: an opaque [`GremlinClient`] trait; paged
//!   queries join their data and count round-trips concurrently
//!
//! # Usage
//!
//! ```no_run
//! use gremlite::{
//!     GremlinRepositoryQuery, GremlinTemplate, ParameterAccessor, ParameterDescriptor,
//!     QueryDeclaration, QueryMethod, ReturnShape,
//! };
//! use std::sync::Arc;
//!
//! # async fn run(client: Arc<impl gremlite::GremlinClient + 'static>) -> gremlite::Result<()> {
//! # #[derive(serde::Deserialize)] struct Person;
//! let method = QueryMethod::parse(
//!     "find_by_name",
//!     QueryDeclaration::new("g.V().hasLabel('person').has('name', name)"),
//!     ReturnShape::EntityList,
//!     vec![ParameterDescriptor::named(0, "name")],
//!     false,
//! )?;
//!
//! let operations = Arc::new(GremlinTemplate::new(client.clone()));
//! let query = GremlinRepositoryQuery::new(method, client, operations);
//!
//! let accessor = ParameterAccessor::new(vec![serde_json::json!("marko")]);
//! let people = query.execute::<Person>(&accessor).await?.into_entities()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`client`] - remote protocol boundary and wire-level result types
//! - [`conversion`] - row-to-entity mapping capability
//! - [`query`] - templates, pagination, criteria, dispatch and execution
//! - [`error`] - error taxonomy

pub mod client;
pub mod conversion;
pub mod error;
pub mod query;

// Re-export the public API surface
pub use client::{GremlinClient, ResultBatch, ResultRow};
pub use conversion::RowMapper;
pub use error::{GremlinError, Result};
pub use query::operations::{GremlinOperations, GremlinTemplate};
pub use query::{
    Criteria, CriteriaQuery, Direction, GremlinQuery, GremlinRepositoryQuery, Page,
    PageRequest, ParameterAccessor, ParameterDescriptor, ParameterMap, QueryDeclaration,
    QueryExecution, QueryMethod, QueryOutput, QueryTemplate, ReturnShape, SortOrder,
    LIMIT_PARAM, SKIP_PARAM,
};

/// Gremlite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gremlite crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
