use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;

pub mod error;
pub mod gemini;

pub use error::LLMError;
pub use gemini::{GeminiConfig, GeminiService};

pub type Result<T> = std::result::Result<T, LLMError>;

#[derive(Debug, Clone)]
pub enum LLMProvider {
    Gemini(GeminiConfig),
}

/// A text-in, text-out generative language model.
#[async_trait]
pub trait LLMService {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone, Default)]
pub struct LLMClientConfig {
    /// Upper bound on a single generation call. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

pub struct LLMClient {
    service: Box<dyn LLMService + Send + Sync>,
    config: LLMClientConfig,
}

impl LLMClient {
    pub fn new(provider: LLMProvider, config: Option<LLMClientConfig>) -> Self {
        let service: Box<dyn LLMService + Send + Sync> = match provider {
            LLMProvider::Gemini(gemini_config) => Box::new(GeminiService::new(gemini_config)),
        };

        Self {
            service,
            config: config.unwrap_or_default(),
        }
    }

    /// Wraps an already constructed service, e.g. a provider not listed in
    /// [`LLMProvider`].
    pub fn from_service(service: Box<dyn LLMService + Send + Sync>) -> Self {
        Self {
            service,
            config: LLMClientConfig::default(),
        }
    }

    /// Sends `prompt` to the provider and returns the generated text.
    ///
    /// Exactly one request is issued; failures are returned, never retried.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!(prompt_len = prompt.len(), "Executing generation request");

        let outcome = match self.config.timeout {
            Some(limit) => match timeout(limit, self.service.generate(prompt)).await {
                Ok(result) => result,
                Err(_) => Err(LLMError::Timeout(limit)),
            },
            None => self.service.generate(prompt).await,
        };

        match &outcome {
            Ok(text) => tracing::debug!(response_len = text.len(), "Generation succeeded"),
            Err(e) => tracing::error!("Generation failed: {}", e),
        }

        outcome
    }

    pub fn with_config(mut self, config: LLMClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }
}
