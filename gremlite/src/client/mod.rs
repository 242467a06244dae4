// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Remote protocol boundary
//!
//! The execution subsystem treats the wire format as opaque: it only ever
//! hands the remote side a traversal string plus a name-to-value binding
//! map, and receives back a batch of decoded result rows. Connection
//! lifecycle, pooling and transport security all live behind this trait.

pub mod result;

pub use result::{ResultBatch, ResultRow};

use crate::error::Result;
use crate::query::params::ParameterMap;
use async_trait::async_trait;

/// Asynchronous client for a remote Gremlin-compatible graph database
///
/// `submit` sends one parameterized traversal and resolves with the full
/// result batch. Failures while awaiting the response surface as
/// [`GremlinError::RemoteExecution`](crate::GremlinError::RemoteExecution);
/// this layer never retries.
#[async_trait]
pub trait GremlinClient: Send + Sync {
    /// Submit a traversal with its parameter bindings
    async fn submit(&self, traversal: &str, bindings: &ParameterMap) -> Result<ResultBatch>;
}
