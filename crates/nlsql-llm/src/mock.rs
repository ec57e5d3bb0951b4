//! Mock SQL completion provider for testing
//!
//! Answers from a table of canned responses keyed by question and records
//! every call, so pipeline tests run without API keys or network access.

use async_trait::async_trait;
use nlsql_core::{LlmError, LlmResult, SqlCompletionProvider};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock SQL completion provider
#[derive(Clone)]
pub struct MockSqlProvider {
    model_name: String,
    responses: Arc<Mutex<HashMap<String, LlmResult<String>>>>,
    default_response: String,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl MockSqlProvider {
    /// Create a mock answering `SELECT 1` to everything
    pub fn new() -> Self {
        Self {
            model_name: "mock-sql".to_string(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: "SELECT 1".to_string(),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock with a custom default answer
    pub fn with_default(sql: &str) -> Self {
        Self {
            default_response: sql.to_string(),
            ..Self::new()
        }
    }

    /// Answer `query` with `sql`
    pub fn set_response(&self, query: &str, sql: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(query.to_string(), Ok(sql.to_string()));
    }

    /// Fail `query` with `error`
    pub fn set_failure(&self, query: &str, error: LlmError) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(query.to_string(), Err(error));
    }

    /// Questions received so far, oldest first
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().unwrap().clone()
    }
}

impl Default for MockSqlProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SqlCompletionProvider for MockSqlProvider {
    fn provider_name(&self) -> &str {
        "Mock"
    }

    fn model(&self) -> &str {
        &self.model_name
    }

    async fn complete_sql(&self, query: &str) -> LlmResult<String> {
        self.call_history.lock().unwrap().push(query.to_string());

        let responses = self.responses.lock().unwrap();
        responses
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(self.default_response.clone()))
    }
}
