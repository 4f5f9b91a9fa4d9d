use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::error::{render_fault, FaultSite};

pub const NO_RELEVANT_INFORMATION: &str = "No relevant information found.";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_FACT_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactCheckError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Search request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Search API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse search response: {0}")]
    Parse(String),
}

/// Outcome of a lookup. An empty result set is not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactCheckResult {
    Snippet(String),
    NotFound,
    Fault(FactCheckError),
}

impl FactCheckResult {
    /// The text shown in the "Fact-Checked Information" section.
    pub fn render(&self) -> String {
        match self {
            FactCheckResult::Snippet(snippet) => snippet.clone(),
            FactCheckResult::NotFound => NO_RELEVANT_INFORMATION.to_string(),
            FactCheckResult::Fault(e) => render_fault(FaultSite::FactCheck, e),
        }
    }
}

/// Looks a query up in a web search engine. Implementations never fail: any
/// fault is reported through [`FactCheckResult::Fault`].
#[async_trait]
pub trait FactLookup {
    async fn lookup(&self, query: &str) -> FactCheckResult;
}

#[derive(Clone)]
pub struct SearchConfig {
    pub api_key: String,
    pub engine_id: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl SearchConfig {
    pub fn new(api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            engine_id: engine_id.into(),
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            timeout: DEFAULT_FACT_CHECK_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("api_key", &"<redacted>")
            .field("engine_id", &self.engine_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

pub struct GoogleSearchService {
    client: Client,
    config: SearchConfig,
}

impl GoogleSearchService {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn search(&self, query: &str) -> Result<Option<String>, FactCheckError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("q", query),
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.engine_id.as_str()),
            ])
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FactCheckError::Status { status, body });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| FactCheckError::Parse(e.to_string()))?;

        Ok(parsed.items.into_iter().next().and_then(|item| item.snippet))
    }

    fn classify(&self, err: reqwest::Error) -> FactCheckError {
        if err.is_timeout() {
            FactCheckError::Timeout(self.config.timeout)
        } else {
            FactCheckError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl FactLookup for GoogleSearchService {
    async fn lookup(&self, query: &str) -> FactCheckResult {
        match self.search(query).await {
            Ok(Some(snippet)) => FactCheckResult::Snippet(snippet),
            Ok(None) => {
                tracing::info!("Fact check found no results");
                FactCheckResult::NotFound
            }
            Err(e) => {
                tracing::error!("Fact check failed: {}", e);
                FactCheckResult::Fault(e)
            }
        }
    }
}
