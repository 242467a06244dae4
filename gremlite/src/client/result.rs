// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Wire-level result types returned by the remote client
//!
//! A submitted traversal yields a [`ResultBatch`] of [`ResultRow`]s. These
//! are transient values: execution strategies consume them immediately to
//! produce the shaped return value and never retain them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a result batch
///
/// Wraps the driver's decoded value for a single traverser. A row is either
/// a scalar (e.g. the output of a `count()` traversal) or a structured
/// record describing a vertex or edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow(Value);

impl ResultRow {
    /// Create a row from a decoded value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying value
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Consume the row and take the underlying value
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Interpret the row as a signed integer scalar
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    /// Interpret the row as a string scalar
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl From<Value> for ResultRow {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The raw, unmapped sequence of rows returned for one submitted traversal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultBatch {
    rows: Vec<ResultRow>,
}

impl ResultBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a batch from decoded values
    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            rows: values.into_iter().map(ResultRow::new).collect(),
        }
    }

    /// Number of rows in the batch
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the batch contains no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow all rows
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Consume the batch and take its rows
    pub fn into_rows(self) -> Vec<ResultRow> {
        self.rows
    }

    /// First row, if any
    pub fn first(&self) -> Option<&ResultRow> {
        self.rows.first()
    }
}

impl From<Vec<ResultRow>> for ResultBatch {
    fn from(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }
}

impl IntoIterator for ResultBatch {
    type Item = ResultRow;
    type IntoIter = std::vec::IntoIter<ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_row_accessors() {
        let row = ResultRow::new(json!(42));
        assert_eq!(row.as_i64(), Some(42));
        assert_eq!(row.as_str(), None);

        let row = ResultRow::new(json!("marko"));
        assert_eq!(row.as_str(), Some("marko"));
    }

    #[test]
    fn test_batch_from_values() {
        let batch = ResultBatch::from_values(vec![json!(1), json!(2)]);
        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());
        assert_eq!(batch.first().and_then(ResultRow::as_i64), Some(1));
    }

    #[test]
    fn test_empty_batch() {
        let batch = ResultBatch::new();
        assert!(batch.is_empty());
        assert!(batch.first().is_none());
    }
}
