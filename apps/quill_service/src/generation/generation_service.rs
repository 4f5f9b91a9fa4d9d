use chrono::Utc;
use quill_llm::LLMClient;
use std::sync::Arc;
use uuid::Uuid;

use super::assembler::assemble_documentation;
use super::generation_model::{
    download_file_name, BlogRequest, DocumentationRequest, GeneratedDocument, GenerationOutcome,
    Submission,
};
use crate::error::{render_fault, FaultSite};
use crate::fact_check::{FactCheckResult, FactLookup};
use crate::prompts::BlogPrompt;

/// Runs one submission end to end. Holds no per-request state, so a single
/// instance is shared by every handler.
#[derive(Clone)]
pub struct GenerationService {
    llm: Arc<LLMClient>,
    fact_lookup: Arc<dyn FactLookup + Send + Sync>,
}

impl GenerationService {
    pub fn new(llm: Arc<LLMClient>, fact_lookup: Arc<dyn FactLookup + Send + Sync>) -> Self {
        Self { llm, fact_lookup }
    }

    pub async fn generate_blog(&self, request: &BlogRequest) -> GeneratedDocument {
        let prompt = BlogPrompt::get_prompt(request);

        match self.llm.generate(&prompt).await {
            Ok(markdown) => GeneratedDocument::new(markdown),
            Err(e) => {
                tracing::error!("Blog generation failed: {}", e);
                GeneratedDocument::new(render_fault(FaultSite::BlogGeneration, &e))
            }
        }
    }

    pub async fn generate_documentation(&self, request: &DocumentationRequest) -> GeneratedDocument {
        assemble_documentation(&self.llm, request).await
    }

    pub async fn fact_check(&self, query: &str) -> FactCheckResult {
        self.fact_lookup.lookup(query).await
    }

    /// Generates the document for a validated submission and, for blog
    /// modes, fact checks the topic afterwards.
    #[tracing::instrument(skip_all, fields(request_id = %request_id))]
    pub async fn execute(
        &self,
        request_id: Uuid,
        title: &str,
        submission: &Submission,
    ) -> GenerationOutcome {
        let (document, fact_check) = match submission {
            Submission::Blog(request) => {
                tracing::info!(
                    audience = request.audience.label(),
                    format = request.content_format.label(),
                    word_count = request.word_count,
                    "Generating blog post"
                );
                let document = self.generate_blog(request).await;
                let fact_check = self.fact_check(&request.topic).await;
                (document, Some(fact_check.render()))
            }
            Submission::Documentation(request) => {
                tracing::info!("Generating project documentation");
                (self.generate_documentation(request).await, None)
            }
        };

        GenerationOutcome {
            request_id,
            title: title.to_string(),
            document,
            download_file_name: download_file_name(title),
            fact_check,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact_check::FactCheckError;
    use crate::generation::generation_model::{Audience, ContentFormat};
    use crate::test_support::{RecordingFactLookup, ScriptedLLM};
    use pretty_assertions::assert_eq;
    use quill_llm::LLMError;

    fn blog_request() -> BlogRequest {
        BlogRequest {
            topic: "Ownership in Rust".to_string(),
            word_count: 700,
            audience: Audience::SoftwareEngineers,
            author_name: "Alex".to_string(),
            description: "Borrowing explained".to_string(),
            content_format: ContentFormat::HowToTutorial,
        }
    }

    fn service(llm: &ScriptedLLM, lookup: &RecordingFactLookup) -> GenerationService {
        GenerationService::new(Arc::new(llm.client()), Arc::new(lookup.clone()))
    }

    #[tokio::test]
    async fn blog_submission_generates_and_fact_checks_topic() {
        let llm = ScriptedLLM::with_responses(vec![Ok("# Ownership".to_string())]);
        let lookup = RecordingFactLookup::returning(FactCheckResult::Snippet(
            "Rust uses ownership.".to_string(),
        ));

        let outcome = service(&llm, &lookup)
            .execute(
                Uuid::new_v4(),
                "My Post",
                &Submission::Blog(blog_request()),
            )
            .await;

        assert_eq!(outcome.document.markdown_text, "# Ownership");
        assert_eq!(outcome.fact_check.as_deref(), Some("Rust uses ownership."));
        assert_eq!(outcome.download_file_name, "My Post.md");
        assert_eq!(lookup.queries(), vec!["Ownership in Rust".to_string()]);
        assert_eq!(llm.calls(), vec![BlogPrompt::get_prompt(&blog_request())]);
    }

    #[tokio::test]
    async fn blog_fault_is_rendered_and_fact_check_still_runs() {
        let llm = ScriptedLLM::with_responses(vec![Err(LLMError::Auth {
            status: 403,
            body: "API key not valid".to_string(),
        })]);
        let lookup = RecordingFactLookup::returning(FactCheckResult::Fault(
            FactCheckError::Network("dns failure".to_string()),
        ));

        let outcome = service(&llm, &lookup)
            .execute(Uuid::new_v4(), "t", &Submission::Blog(blog_request()))
            .await;

        assert_eq!(
            outcome.document.markdown_text,
            "Error generating blog content: Authentication failed (403): API key not valid"
        );
        assert_eq!(
            outcome.fact_check.as_deref(),
            Some("Error during fact checking: Network error: dns failure")
        );
    }

    #[tokio::test]
    async fn documentation_submission_skips_fact_check() {
        let llm = ScriptedLLM::new();
        let lookup = RecordingFactLookup::returning(FactCheckResult::NotFound);

        let outcome = service(&llm, &lookup)
            .execute(
                Uuid::new_v4(),
                "Docs",
                &Submission::Documentation(DocumentationRequest {
                    source_text: "a\n\nb".to_string(),
                    description: "desc".to_string(),
                }),
            )
            .await;

        assert!(outcome.fact_check.is_none());
        assert!(lookup.queries().is_empty());
        // two blocks plus the final documentation call
        assert_eq!(llm.calls().len(), 3);
        assert_eq!(outcome.document.markdown_text, "generated #3");
    }
}
