use quill_llm::{LLMClient, LLMProvider};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::fact_check::{FactLookup, GoogleSearchService};
use crate::generation::generation_service::GenerationService;

#[derive(Clone)]
pub struct AppService {
    pub generation_service: GenerationService,
}

impl AppService {
    pub fn new(llm: LLMClient, fact_lookup: Arc<dyn FactLookup + Send + Sync>) -> Self {
        let generation_service = GenerationService::new(Arc::new(llm), fact_lookup);

        Self { generation_service }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let llm = LLMClient::new(
            LLMProvider::Gemini(config.gemini.clone()),
            Some(config.llm_client_config()),
        );
        let fact_lookup = Arc::new(GoogleSearchService::new(config.search.clone()));

        Self::with_clients(llm, fact_lookup)
    }

    pub fn with_clients(llm: LLMClient, fact_lookup: Arc<dyn FactLookup + Send + Sync>) -> Self {
        Self {
            service: AppService::new(llm, fact_lookup),
        }
    }
}
