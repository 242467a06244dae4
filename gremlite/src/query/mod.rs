// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query declaration, rewriting, dispatch and execution

pub mod criteria;
pub mod dispatch;
pub mod execution;
pub mod method;
pub mod operations;
pub mod page;
pub mod params;
pub mod template;

pub use criteria::{Criteria, CriteriaKind};
pub use dispatch::{CriteriaQuery, GremlinRepositoryQuery};
pub use execution::{QueryExecution, QueryOutput};
pub use method::{QueryDeclaration, QueryMethod, ReturnShape};
pub use page::{Direction, Page, PageRequest, SortOrder};
pub use params::{resolve_parameters, ParameterAccessor, ParameterDescriptor, ParameterMap};
pub use template::{QueryTemplate, LIMIT_PARAM, SKIP_PARAM};

use crate::error::{GremlinError, Result};

/// Fully resolved query for a single invocation
///
/// Either a reference to the method's immutable template together with the
/// parameters resolved from this invocation's arguments, or a criteria
/// tree for derived methods. Never reused across invocations: skip/limit
/// and sort clauses are request-specific.
pub enum GremlinQuery<'a> {
    Template {
        template: &'a QueryTemplate,
        params: ParameterMap,
    },
    Criteria(Criteria),
}

impl<'a> GremlinQuery<'a> {
    /// Build a templated query from resolved parameters
    pub fn from_template(template: &'a QueryTemplate, params: ParameterMap) -> Self {
        GremlinQuery::Template { template, params }
    }

    /// Build a criteria query
    pub fn from_criteria(criteria: Criteria) -> Self {
        GremlinQuery::Criteria(criteria)
    }

    /// The template and parameters of a templated query
    ///
    /// Dispatching a criteria query to a template-based strategy is a
    /// configuration error.
    pub(crate) fn template_and_params(&self) -> Result<(&QueryTemplate, &ParameterMap)> {
        match self {
            GremlinQuery::Template { template, params } => Ok((template, params)),
            GremlinQuery::Criteria(_) => Err(GremlinError::Configuration(
                "criteria query dispatched to a template execution".to_string(),
            )),
        }
    }
}
