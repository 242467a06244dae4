// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Criteria for non-templated queries
//!
//! Derived repository methods carry no traversal template; they describe
//! what to match as a [`Criteria`] tree and delegate traversal generation
//! to the operations collaborator.

use serde_json::Value;

/// Kind of one criteria node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaKind {
    /// Property equals a bound value
    IsEqual,
    /// Property exists on the element
    Exists,
    /// All sub-criteria hold
    And,
    /// At least one sub-criterion holds
    Or,
}

/// One node of a criteria tree
///
/// Leaf nodes (`IsEqual`, `Exists`) carry a subject property and, for
/// equality, the bound value; composite nodes (`And`, `Or`) carry
/// sub-criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    kind: CriteriaKind,
    subject: Option<String>,
    values: Vec<Value>,
    sub_criteria: Vec<Criteria>,
}

impl Criteria {
    /// Property equality criterion
    pub fn is_equal(subject: impl Into<String>, value: Value) -> Self {
        Self {
            kind: CriteriaKind::IsEqual,
            subject: Some(subject.into()),
            values: vec![value],
            sub_criteria: Vec::new(),
        }
    }

    /// Property existence criterion
    pub fn exists(subject: impl Into<String>) -> Self {
        Self {
            kind: CriteriaKind::Exists,
            subject: Some(subject.into()),
            values: Vec::new(),
            sub_criteria: Vec::new(),
        }
    }

    /// Conjunction of two criteria
    pub fn and(lhs: Criteria, rhs: Criteria) -> Self {
        Self {
            kind: CriteriaKind::And,
            subject: None,
            values: Vec::new(),
            sub_criteria: vec![lhs, rhs],
        }
    }

    /// Disjunction of two criteria
    pub fn or(lhs: Criteria, rhs: Criteria) -> Self {
        Self {
            kind: CriteriaKind::Or,
            subject: None,
            values: Vec::new(),
            sub_criteria: vec![lhs, rhs],
        }
    }

    pub fn kind(&self) -> CriteriaKind {
        self.kind
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn sub_criteria(&self) -> &[Criteria] {
        &self.sub_criteria
    }
}
