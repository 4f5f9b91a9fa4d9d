//! Process configuration, read from the environment once at startup.
//!
//! `.env` files are honoured through `dotenvy` in `main`.

use quill_llm::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use quill_llm::{GeminiConfig, LLMClientConfig};
use std::time::Duration;

use crate::error::ConfigError;
use crate::fact_check::fact_check_service::{DEFAULT_FACT_CHECK_TIMEOUT, DEFAULT_SEARCH_BASE_URL};
use crate::fact_check::SearchConfig;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub generation_timeout: Option<Duration>,
    pub search: SearchConfig,
    pub bind_address: String,
    pub environment: Environment,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| ConfigError::Missing(key.to_string()));

        let gemini = GeminiConfig::new(require("GEMINI_API_KEY")?)
            .with_model(get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()))
            .with_base_url(
                get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            );

        let generation_timeout = get("GEMINI_TIMEOUT_SECS")
            .map(|value| parse_secs("GEMINI_TIMEOUT_SECS", &value))
            .transpose()?;

        let fact_check_timeout = get("FACT_CHECK_TIMEOUT_SECS")
            .map(|value| parse_secs("FACT_CHECK_TIMEOUT_SECS", &value))
            .transpose()?
            .unwrap_or(DEFAULT_FACT_CHECK_TIMEOUT);

        let search = SearchConfig::new(
            require("GOOGLE_SEARCH_API_KEY")?,
            require("GOOGLE_SEARCH_ENGINE_ID")?,
        )
        .with_base_url(
            get("GOOGLE_SEARCH_BASE_URL").unwrap_or_else(|| DEFAULT_SEARCH_BASE_URL.to_string()),
        )
        .with_timeout(fact_check_timeout);

        let environment = match get("APP_ENVIRONMENT").as_deref() {
            None | Some("dev") => Environment::Dev,
            Some(_) => Environment::Prod,
        };

        Ok(Self {
            gemini,
            generation_timeout,
            search,
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            environment,
        })
    }

    pub fn llm_client_config(&self) -> LLMClientConfig {
        LLMClientConfig {
            timeout: self.generation_timeout,
        }
    }
}

fn parse_secs(var: &str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::Invalid {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
