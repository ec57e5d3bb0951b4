//! Question → SQL options orchestration
//!
//! Collaborators are constructed by the caller and injected through
//! [`QueryPipelineBuilder`]; the pipeline owns no global clients.
//!
//! ```text
//! parsers ──► seeds ──► alignment check ──► consensus option (2+ parsers)
//!                              │
//!                              ▼
//!                    reformulation search ──► classify ──► render ──► options
//!                                                                       ▲
//! completion provider (optional) ───────────────────────────────────────┘
//! ```

use crate::align::{classify_checked, ensure_same_length, AlignedParse};
use crate::error::{PipelineError, PipelineResult};
use crate::render::{RenderedQuery, SqlRenderer};
use crate::role::RuleBasedClassifier;
use crate::search::ReformulationSearch;
use crate::token::ParseSequence;
use crate::traits::{DependencyParser, RoleClassifier, SqlCompletionProvider};
use nlsql_config::Config;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where a SQL option came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionOrigin {
    /// Both parses merged position by position
    Consensus,
    /// The `rank`-th candidate found by reformulation search (0-based)
    Reformulation {
        /// Discovery order
        rank: usize,
    },
    /// Direct LLM completion
    Llm {
        /// Provider name
        provider: String,
        /// Model name
        model: String,
    },
}

/// One SQL statement offered for the question
#[derive(Debug, Clone, PartialEq)]
pub struct SqlOption {
    /// Where the statement came from
    pub origin: OptionOrigin,
    /// Statement text
    pub sql: String,
    /// Bound parameters (empty for LLM options)
    pub params: HashMap<String, Value>,
}

impl SqlOption {
    fn rendered(origin: OptionOrigin, rendered: RenderedQuery) -> Self {
        Self {
            origin,
            sql: rendered.sql,
            params: rendered.params,
        }
    }
}

impl fmt::Display for SqlOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Query Option:\n{}", self.sql)
    }
}

/// Question-to-SQL pipeline
pub struct QueryPipeline {
    parsers: Vec<Arc<dyn DependencyParser>>,
    classifier: Arc<dyn RoleClassifier>,
    renderer: SqlRenderer,
    search: ReformulationSearch,
    completion: Option<Arc<dyn SqlCompletionProvider>>,
}

impl QueryPipeline {
    /// Start building a pipeline
    pub fn builder() -> QueryPipelineBuilder {
        QueryPipelineBuilder::new()
    }

    /// Names of the injected parsers, primary first
    pub fn parser_names(&self) -> Vec<&str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    /// Parse `question` with every parser concurrently
    pub async fn parse_all(&self, question: &str) -> PipelineResult<Vec<ParseSequence>> {
        let parses = self.parsers.iter().map(|parser| async move {
            parser
                .parse(question)
                .await
                .map_err(|source| PipelineError::Parse {
                    parser: parser.name().to_string(),
                    source,
                })
        });
        futures::future::try_join_all(parses).await
    }

    /// Produce every SQL option for `question`.
    ///
    /// Parser failures and misaligned parses abort the run. A failing
    /// completion provider only drops the LLM option.
    pub async fn run(&self, question: &str) -> PipelineResult<Vec<SqlOption>> {
        let question = question.trim();
        if question.is_empty() {
            return Err(PipelineError::EmptyQuestion);
        }

        let seeds = self.parse_all(question).await?;
        ensure_same_length(self.parser_names().into_iter().zip(&seeds))?;
        debug!(
            parsers = seeds.len(),
            tokens = seeds.first().map_or(0, ParseSequence::len),
            "Parsed question"
        );

        let mut options = Vec::new();

        if let [primary, secondary, ..] = seeds.as_slice() {
            let names = self.parser_names();
            let aligned = AlignedParse::new(names[0], primary, names[1], secondary)?;
            let merged = aligned.merge(self.classifier.as_ref())?;
            let rendered = self.renderer.render(&merged.sequence, &merged.roles)?;
            options.push(SqlOption::rendered(OptionOrigin::Consensus, rendered));
        }

        let outcome = self.search.run(&seeds)?;
        for (rank, candidate) in outcome.candidates.iter().enumerate() {
            let roles = classify_checked(self.classifier.as_ref(), candidate)?;
            let rendered = self.renderer.render(candidate, &roles)?;
            options.push(SqlOption::rendered(
                OptionOrigin::Reformulation { rank },
                rendered,
            ));
        }

        if let Some(provider) = &self.completion {
            match provider.complete_sql(question).await {
                Ok(sql) => options.push(SqlOption {
                    origin: OptionOrigin::Llm {
                        provider: provider.provider_name().to_string(),
                        model: provider.model().to_string(),
                    },
                    sql,
                    params: HashMap::new(),
                }),
                Err(e) => warn!(
                    provider = provider.provider_name(),
                    error = %e,
                    "SQL completion failed, omitting LLM option"
                ),
            }
        }

        info!(
            candidates = outcome.stats.returned,
            options = options.len(),
            "Produced SQL options"
        );
        Ok(options)
    }
}

/// Builder for [`QueryPipeline`]
pub struct QueryPipelineBuilder {
    parsers: Vec<Arc<dyn DependencyParser>>,
    classifier: Option<Arc<dyn RoleClassifier>>,
    renderer: Option<SqlRenderer>,
    search: Option<ReformulationSearch>,
    completion: Option<Arc<dyn SqlCompletionProvider>>,
}

impl Default for QueryPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryPipelineBuilder {
    /// Empty builder: rule-based classifier, default renderer and search
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
            classifier: None,
            renderer: None,
            search: None,
            completion: None,
        }
    }

    /// Take renderer and search settings from configuration
    pub fn with_config(mut self, config: &Config) -> Self {
        self.renderer = Some(SqlRenderer::from_config(&config.render));
        self.search = Some(ReformulationSearch::from_config(
            &config.search,
            &config.grammar,
        ));
        self
    }

    /// Add a parser. The first one added is the primary.
    pub fn with_parser(mut self, parser: impl DependencyParser + 'static) -> Self {
        self.parsers.push(Arc::new(parser));
        self
    }

    /// Add a shared parser
    pub fn with_shared_parser(mut self, parser: Arc<dyn DependencyParser>) -> Self {
        self.parsers.push(parser);
        self
    }

    /// Replace the role classifier
    pub fn with_classifier(mut self, classifier: impl RoleClassifier + 'static) -> Self {
        self.classifier = Some(Arc::new(classifier));
        self
    }

    /// Replace the renderer
    pub fn with_renderer(mut self, renderer: SqlRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Replace the search
    pub fn with_search(mut self, search: ReformulationSearch) -> Self {
        self.search = Some(search);
        self
    }

    /// Add an LLM provider for the alternative option
    pub fn with_completion_provider(mut self, provider: Arc<dyn SqlCompletionProvider>) -> Self {
        self.completion = Some(provider);
        self
    }

    /// Build the pipeline; at least one parser is required
    pub fn build(self) -> PipelineResult<QueryPipeline> {
        if self.parsers.is_empty() {
            return Err(PipelineError::NoParsers);
        }
        Ok(QueryPipeline {
            parsers: self.parsers,
            classifier: self
                .classifier
                .unwrap_or_else(|| Arc::new(RuleBasedClassifier)),
            renderer: self.renderer.unwrap_or_default(),
            search: self.search.unwrap_or_default(),
            completion: self.completion,
        })
    }
}
