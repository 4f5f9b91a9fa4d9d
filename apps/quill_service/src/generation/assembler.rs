use quill_llm::LLMClient;

use super::generation_model::{BlockExplanation, DocumentationRequest, GeneratedDocument};
use super::segmenter::segment_blocks;
use crate::error::{render_fault, FaultSite};
use crate::prompts::{BlockExplanationPrompt, DocumentationPrompt};

/// Joins explanations under `### Code Block {index} Explanation` headings,
/// each followed by a blank line, in the order given.
pub fn assemble_explanations(explanations: &[BlockExplanation]) -> String {
    explanations
        .iter()
        .map(|explanation| {
            format!(
                "### Code Block {} Explanation\n{}\n\n",
                explanation.index, explanation.explanation_text
            )
        })
        .collect()
}

/// Requests one explanation per block, strictly one at a time in block order.
///
/// A failed request does not stop the loop: the fault message becomes that
/// block's explanation text.
pub async fn explain_blocks(llm: &LLMClient, source_text: &str) -> Vec<BlockExplanation> {
    let mut explanations = Vec::new();

    for (offset, block) in segment_blocks(source_text).enumerate() {
        let index = offset + 1;
        let prompt = BlockExplanationPrompt::get_prompt(index, block);

        let explanation_text = match llm.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(block = index, "Block explanation failed: {}", e);
                render_fault(FaultSite::BlockExplanation, &e)
            }
        };

        explanations.push(BlockExplanation {
            index,
            source_block: block.to_string(),
            explanation_text,
        });
    }

    explanations
}

#[tracing::instrument(skip_all, fields(source_len = request.source_text.len()))]
pub async fn assemble_documentation(
    llm: &LLMClient,
    request: &DocumentationRequest,
) -> GeneratedDocument {
    let explanations = explain_blocks(llm, &request.source_text).await;
    tracing::info!(blocks = explanations.len(), "Explained code blocks");

    let assembled = assemble_explanations(&explanations);
    let prompt = DocumentationPrompt::get_prompt(&request.description, &assembled);

    match llm.generate(&prompt).await {
        Ok(markdown) => GeneratedDocument::new(markdown),
        Err(e) => {
            tracing::error!("Documentation generation failed: {}", e);
            GeneratedDocument::new(render_fault(FaultSite::Documentation, &e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedLLM;
    use pretty_assertions::assert_eq;
    use quill_llm::LLMError;

    fn explanation(index: usize, text: &str) -> BlockExplanation {
        BlockExplanation {
            index,
            source_block: format!("block {}", index),
            explanation_text: text.to_string(),
        }
    }

    #[test]
    fn assembles_headings_in_ascending_order() {
        let explanations: Vec<BlockExplanation> = (1..=5)
            .map(|i| explanation(i, &format!("explains {}", i)))
            .collect();

        let assembled = assemble_explanations(&explanations);

        let mut last_position = 0;
        for i in 1..=5 {
            let heading = format!("### Code Block {} Explanation\nexplains {}\n\n", i, i);
            let position = assembled.find(&heading).expect("heading missing");
            assert!(i == 1 || position > last_position);
            last_position = position;
        }
        assert_eq!(assembled.matches("### Code Block").count(), 5);
    }

    #[test]
    fn assembles_exact_layout() {
        let assembled =
            assemble_explanations(&[explanation(1, "first"), explanation(2, "second")]);
        assert_eq!(
            assembled,
            "### Code Block 1 Explanation\nfirst\n\n### Code Block 2 Explanation\nsecond\n\n"
        );
    }

    #[test]
    fn nothing_to_assemble_gives_empty_text() {
        assert_eq!(assemble_explanations(&[]), "");
    }

    #[tokio::test]
    async fn explains_each_block_sequentially_in_order() {
        let llm = ScriptedLLM::new();
        let explanations = explain_blocks(&llm.client(), "one\n\ntwo\n\nthree").await;

        let calls = llm.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls[0].contains("Code Block 1:\none\n"));
        assert!(calls[1].contains("Code Block 2:\ntwo\n"));
        assert!(calls[2].contains("Code Block 3:\nthree\n"));

        let indices: Vec<usize> = explanations.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(explanations[1].source_block, "two");
        assert_eq!(explanations[1].explanation_text, "generated #2");
    }

    #[tokio::test]
    async fn failed_block_is_replaced_by_fault_and_loop_continues() {
        let llm = ScriptedLLM::with_responses(vec![
            Ok("first ok".to_string()),
            Err(LLMError::Network("connection reset".to_string())),
            Ok("third ok".to_string()),
        ]);

        let explanations = explain_blocks(&llm.client(), "a\n\nb\n\nc").await;

        assert_eq!(llm.calls().len(), 3);
        assert_eq!(explanations[0].explanation_text, "first ok");
        assert_eq!(
            explanations[1].explanation_text,
            "Error explaining code block: Network error: connection reset"
        );
        assert_eq!(explanations[2].explanation_text, "third ok");
    }

    #[tokio::test]
    async fn empty_source_is_explained_as_one_empty_block() {
        let llm = ScriptedLLM::new();
        let explanations = explain_blocks(&llm.client(), "").await;

        assert_eq!(explanations.len(), 1);
        assert_eq!(explanations[0].source_block, "");
    }

    #[tokio::test]
    async fn final_prompt_carries_description_and_explanations() {
        let llm = ScriptedLLM::with_responses(vec![
            Ok("opens the db".to_string()),
            Ok("serves requests".to_string()),
            Ok("# Project docs".to_string()),
        ]);
        let request = DocumentationRequest {
            source_text: "let db = open();\n\nserve(db);".to_string(),
            description: "A tiny server".to_string(),
        };

        let document = assemble_documentation(&llm.client(), &request).await;

        assert_eq!(document.markdown_text, "# Project docs");
        let calls = llm.calls();
        assert_eq!(calls.len(), 3);
        let final_prompt = &calls[2];
        assert!(final_prompt.contains("Project Description:\nA tiny server\n"));
        assert!(final_prompt.contains(
            "### Code Block 1 Explanation\nopens the db\n\n### Code Block 2 Explanation\nserves requests\n\n"
        ));
    }

    #[tokio::test]
    async fn final_fault_becomes_the_document() {
        let llm = ScriptedLLM::with_responses(vec![
            Ok("explained".to_string()),
            Err(LLMError::Auth {
                status: 401,
                body: "bad key".to_string(),
            }),
        ]);
        let request = DocumentationRequest {
            source_text: "x".to_string(),
            description: "d".to_string(),
        };

        let document = assemble_documentation(&llm.client(), &request).await;

        assert!(document
            .markdown_text
            .starts_with("Error generating documentation: "));
    }
}
