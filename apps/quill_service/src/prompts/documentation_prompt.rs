pub struct DocumentationPrompt;

impl DocumentationPrompt {
    /// `explanations` is the assembled per-block text, see
    /// [`crate::generation::assembler::assemble_explanations`].
    pub fn get_prompt(description: &str, explanations: &str) -> String {
        format!(
            r#"Create detailed project documentation in Markdown format based on the following information:

Project Description:
{description}

Code Explanations:
{explanations}

Include:
1. Project Overview
2. Technical Architecture
3. Installation Instructions
4. Usage Guide
5. Dependencies list
6. Best practices and recommendations

Make it engaging and easy to understand."#
        )
    }
}
