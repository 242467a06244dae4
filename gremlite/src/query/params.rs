// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Parameter resolution
//!
//! Turns a method's parameter metadata plus the runtime argument values of
//! one invocation into the named binding map submitted with a traversal.
//! The map is built fresh per invocation and never shared across threads.

use crate::error::{GremlinError, Result};
use crate::query::page::PageRequest;
use serde_json::Value;
use std::collections::HashMap;

/// Named parameter bindings for one traversal submission
pub type ParameterMap = HashMap<String, Value>;

/// Positional metadata for one declared method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    index: usize,
    name: Option<String>,
}

impl ParameterDescriptor {
    /// A parameter bound under a declared name
    pub fn named(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: Some(name.into()),
        }
    }

    /// A parameter without a declared name
    ///
    /// Only useful when the runtime value is itself a parameter bag; a
    /// nameless scalar argument is simply skipped.
    pub fn positional(index: usize) -> Self {
        Self { index, name: None }
    }

    /// Positional index into the invocation's argument array
    pub fn index(&self) -> usize {
        self.index
    }

    /// Declared name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Resolve runtime arguments into a named parameter map
///
/// For each descriptor: if the corresponding argument is itself a
/// name-to-value mapping, all of its entries are merged in (callers may
/// pass a whole parameter bag positionally); if the descriptor declares a
/// name, the argument is then bound under that name. Bag merge happens
/// first, so an explicit named binding always wins on key collision.
pub fn resolve_parameters(descriptors: &[ParameterDescriptor], arguments: &[Value]) -> ParameterMap {
    let mut resolved = ParameterMap::new();

    for descriptor in descriptors {
        let value = match arguments.get(descriptor.index()) {
            Some(value) => value,
            None => continue,
        };

        if let Value::Object(bag) = value {
            for (key, entry) in bag {
                resolved.insert(key.clone(), entry.clone());
            }
        }

        if let Some(name) = descriptor.name() {
            resolved.insert(name.to_string(), value.clone());
        }
    }

    resolved
}

/// Runtime view of one repository-method invocation
///
/// Handed over by the repository-proxy collaborator: the raw argument
/// values in declaration order, plus the page request when the method
/// declares a pageable parameter.
#[derive(Debug, Clone)]
pub struct ParameterAccessor {
    arguments: Vec<Value>,
    page_request: Option<PageRequest>,
}

impl ParameterAccessor {
    /// Accessor for a non-paged invocation
    pub fn new(arguments: Vec<Value>) -> Self {
        Self {
            arguments,
            page_request: None,
        }
    }

    /// Attach the page request extracted from the pageable argument
    pub fn with_page_request(mut self, page_request: PageRequest) -> Self {
        self.page_request = Some(page_request);
        self
    }

    /// Raw argument values in declaration order
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// The page request of a paged invocation
    ///
    /// A paged execution without one is a contract violation.
    pub fn page_request(&self) -> Result<&PageRequest> {
        self.page_request.as_ref().ok_or_else(|| {
            GremlinError::Configuration(
                "paged execution requires a page request on the accessor".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_binding() {
        let descriptors = vec![
            ParameterDescriptor::named(0, "name"),
            ParameterDescriptor::named(1, "age"),
        ];
        let arguments = vec![json!("marko"), json!(29)];

        let resolved = resolve_parameters(&descriptors, &arguments);
        assert_eq!(resolved.get("name"), Some(&json!("marko")));
        assert_eq!(resolved.get("age"), Some(&json!(29)));
    }

    #[test]
    fn test_parameter_bag_merged() {
        let descriptors = vec![ParameterDescriptor::positional(0)];
        let arguments = vec![json!({"name": "marko", "age": 29})];

        let resolved = resolve_parameters(&descriptors, &arguments);
        assert_eq!(resolved.get("name"), Some(&json!("marko")));
        assert_eq!(resolved.get("age"), Some(&json!(29)));
    }

    #[test]
    fn test_named_slot_binds_whole_bag_after_merge() {
        // A named slot whose value is a bag merges the bag first, then
        // binds the whole bag under the declared name.
        let descriptors = vec![ParameterDescriptor::named(0, "filters")];
        let arguments = vec![json!({"x": 1})];

        let resolved = resolve_parameters(&descriptors, &arguments);
        assert_eq!(resolved.get("x"), Some(&json!(1)));
        assert_eq!(resolved.get("filters"), Some(&json!({"x": 1})));
    }

    #[test]
    fn test_named_binding_wins_over_bag_entry() {
        let descriptors = vec![
            ParameterDescriptor::positional(0),
            ParameterDescriptor::named(1, "x"),
        ];
        let arguments = vec![json!({"x": 1}), json!(2)];

        let resolved = resolve_parameters(&descriptors, &arguments);
        assert_eq!(resolved.get("x"), Some(&json!(2)));
    }

    #[test]
    fn test_nameless_scalar_skipped() {
        let descriptors = vec![ParameterDescriptor::positional(0)];
        let arguments = vec![json!(42)];

        let resolved = resolve_parameters(&descriptors, &arguments);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_missing_argument_skipped() {
        let descriptors = vec![ParameterDescriptor::named(5, "name")];
        let resolved = resolve_parameters(&descriptors, &[]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_accessor_without_page_request() {
        let accessor = ParameterAccessor::new(vec![]);
        assert!(matches!(
            accessor.page_request(),
            Err(GremlinError::Configuration(_))
        ));
    }
}
