//! Shared test fixtures: a scripted mock client standing in for the
//! remote graph database.

use async_trait::async_trait;
use gremlite::{GremlinClient, GremlinError, ParameterMap, Result, ResultBatch};
use serde_json::Value;
use std::sync::Mutex;

/// One recorded submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub traversal: String,
    pub bindings: ParameterMap,
}

/// Scripted client: returns `count` for count traversals and `data_rows`
/// for everything else, recording every submission on the way.
#[derive(Default)]
pub struct MockClient {
    pub data_rows: Vec<Value>,
    pub count: Option<i64>,
    /// Overrides `count` with arbitrary rows when set
    pub count_rows: Option<Vec<Value>>,
    pub fail_data: bool,
    pub fail_count: bool,
    pub submissions: Mutex<Vec<Submission>>,
}

impl MockClient {
    pub fn with_data(data_rows: Vec<Value>) -> Self {
        Self {
            data_rows,
            ..Default::default()
        }
    }

    pub fn with_data_and_count(data_rows: Vec<Value>, count: i64) -> Self {
        Self {
            data_rows,
            count: Some(count),
            ..Default::default()
        }
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl GremlinClient for MockClient {
    async fn submit(&self, traversal: &str, bindings: &ParameterMap) -> Result<ResultBatch> {
        self.submissions.lock().unwrap().push(Submission {
            traversal: traversal.to_string(),
            bindings: bindings.clone(),
        });

        let is_count = traversal.contains(".count()");
        if is_count && self.fail_count {
            return Err(GremlinError::RemoteExecution(
                "count traversal failed".to_string(),
            ));
        }
        if !is_count && self.fail_data {
            return Err(GremlinError::RemoteExecution(
                "data traversal failed".to_string(),
            ));
        }

        if is_count {
            let rows = match &self.count_rows {
                Some(rows) => rows.clone(),
                None => self.count.map(|c| vec![Value::from(c)]).unwrap_or_default(),
            };
            return Ok(ResultBatch::from_values(rows));
        }
        Ok(ResultBatch::from_values(self.data_rows.clone()))
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
