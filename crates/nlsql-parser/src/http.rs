//! HTTP client for parser services

use crate::conllu::parse_conllu;
use crate::spacy::{from_spacy_doc, SpacyDoc};
use async_trait::async_trait;
use nlsql_config::{ParserEndpointConfig, ParserFormat};
use nlsql_core::{DependencyParser, ParseError, ParseResult, ParseSequence};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Dependency parser backed by a service accepting `POST {"text": ...}`
pub struct HttpDependencyParser {
    client: reqwest::Client,
    name: String,
    endpoint: String,
    format: ParserFormat,
    timeout: Duration,
}

impl HttpDependencyParser {
    /// Create a new parser client
    pub fn new(name: String, endpoint: String, format: ParserFormat, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            name,
            endpoint,
            format,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Create a parser client from configuration
    pub fn from_config(config: &ParserEndpointConfig) -> Self {
        Self::new(
            config.name.clone(),
            config.endpoint.clone(),
            config.format,
            config.timeout_secs(),
        )
    }

    /// Response format this client expects
    pub fn format(&self) -> ParserFormat {
        self.format
    }

    async fn adapt(&self, response: reqwest::Response) -> ParseResult<ParseSequence> {
        match self.format {
            ParserFormat::Spacy => {
                let doc: SpacyDoc = response.json().await.map_err(|e| {
                    ParseError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                from_spacy_doc(&doc)
            }
            ParserFormat::Conllu => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| ParseError::Http(e.to_string()))?;
                parse_conllu(&body)
            }
        }
    }
}

#[async_trait]
impl DependencyParser for HttpDependencyParser {
    fn name(&self) -> &str {
        &self.name
    }

    async fn parse(&self, query: &str) -> ParseResult<ParseSequence> {
        if query.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "text": query }))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ParseError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ParseError::InvalidResponse(format!(
                "Parser '{}' error ({}): {}",
                self.name, status, error_text
            )));
        }

        let sequence = self.adapt(response).await?;
        debug!(parser = %self.name, tokens = sequence.len(), "Parsed question");
        Ok(sequence)
    }
}

/// Create one parser client per configured endpoint, in order
pub fn create_parsers(configs: &[ParserEndpointConfig]) -> Vec<Arc<dyn DependencyParser>> {
    configs
        .iter()
        .map(|config| Arc::new(HttpDependencyParser::from_config(config)) as Arc<dyn DependencyParser>)
        .collect()
}
