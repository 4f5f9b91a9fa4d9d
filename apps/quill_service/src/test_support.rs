//! Recording fakes for the two external collaborators.

use async_trait::async_trait;
use quill_llm::{LLMClient, LLMError, LLMService};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::fact_check::{FactCheckResult, FactLookup};

/// Replies with queued responses, then with `generated #<call number>`.
#[derive(Clone, Default)]
pub struct ScriptedLLM {
    calls: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<VecDeque<Result<String, LLMError>>>>,
}

impl ScriptedLLM {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: Vec<Result<String, LLMError>>) -> Self {
        Self {
            calls: Arc::default(),
            responses: Arc::new(Mutex::new(responses.into())),
        }
    }

    pub fn client(&self) -> LLMClient {
        LLMClient::from_service(Box::new(self.clone()))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMService for ScriptedLLM {
    async fn generate(&self, prompt: &str) -> quill_llm::Result<String> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(prompt.to_string());
            calls.len()
        };

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(format!("generated #{}", call_number)))
    }
}

#[derive(Clone)]
pub struct RecordingFactLookup {
    queries: Arc<Mutex<Vec<String>>>,
    result: FactCheckResult,
}

impl RecordingFactLookup {
    pub fn returning(result: FactCheckResult) -> Self {
        Self {
            queries: Arc::default(),
            result,
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl FactLookup for RecordingFactLookup {
    async fn lookup(&self, query: &str) -> FactCheckResult {
        self.queries.lock().unwrap().push(query.to_string());
        self.result.clone()
    }
}
