// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Row-to-entity conversion
//!
//! Execution strategies never inspect result rows themselves; when the
//! declared return shape is not the raw result batch they delegate to a
//! [`RowMapper`]. The capability is a trait so that any operations
//! implementation may provide it - strategies depend on the capability,
//! not on a concrete type.

use crate::client::ResultBatch;
use crate::error::Result;
use serde::de::DeserializeOwned;

/// Capability to map raw result rows into typed domain entities
pub trait RowMapper: Send + Sync {
    /// Map every row of the batch into an entity of the target type
    ///
    /// Returns an empty list for an empty batch; a row the target type
    /// cannot represent is a [`Mapping`](crate::GremlinError::Mapping)
    /// error, never a partial result.
    fn map_rows<T: DeserializeOwned>(&self, batch: &ResultBatch) -> Result<Vec<T>>;
}

/// Deserialize each row of a batch through serde
///
/// The standard mapping used by
/// [`GremlinTemplate`](crate::query::operations::GremlinTemplate): every
/// row value is fed to `serde_json::from_value` for the target type.
pub fn deserialize_rows<T: DeserializeOwned>(batch: &ResultBatch) -> Result<Vec<T>> {
    let mut entities = Vec::with_capacity(batch.len());
    for row in batch.rows() {
        entities.push(serde_json::from_value(row.value().clone())?);
    }
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Person {
        name: String,
        age: u32,
    }

    #[test]
    fn test_deserialize_rows() {
        let batch = ResultBatch::from_values(vec![
            json!({"name": "marko", "age": 29}),
            json!({"name": "vadas", "age": 27}),
        ]);

        let people: Vec<Person> = deserialize_rows(&batch).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "marko");
        assert_eq!(people[1].age, 27);
    }

    #[test]
    fn test_deserialize_empty_batch() {
        let batch = ResultBatch::new();
        let people: Vec<Person> = deserialize_rows(&batch).unwrap();
        assert!(people.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_mismatched_row() {
        let batch = ResultBatch::from_values(vec![json!({"name": "marko"})]);
        let result: Result<Vec<Person>> = deserialize_rows(&batch);
        assert!(result.is_err());
    }
}
