pub struct BlockExplanationPrompt;

impl BlockExplanationPrompt {
    pub fn get_prompt(index: usize, block: &str) -> String {
        format!(
            r#"Explain the following code block in simple terms:

Code Block {index}:
{block}

Provide an easy-to-understand explanation, including:
- Purpose of the block
- Key components
- How the block fits into the overall functionality
- Any example use cases or scenarios for this block"#
        )
    }
}
