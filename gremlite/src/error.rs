// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query execution error types

use thiserror::Error;

/// Errors surfaced by the query execution subsystem
///
/// Configuration errors are detected before any remote call is made and
/// should fail repository startup. Remote-execution errors are fatal for the
/// current invocation; retry policy belongs to the caller or the client.
#[derive(Error, Debug)]
pub enum GremlinError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unsupported result shape: {0}")]
    UnsupportedShape(String),

    #[error("Remote execution error: {0}")]
    RemoteExecution(String),

    #[error("Mapping error: {0}")]
    Mapping(String),
}

impl From<serde_json::Error> for GremlinError {
    fn from(error: serde_json::Error) -> Self {
        GremlinError::Mapping(error.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GremlinError>;
