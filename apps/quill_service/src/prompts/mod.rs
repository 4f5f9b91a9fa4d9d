pub mod blog_prompt;
pub mod block_explanation_prompt;
pub mod documentation_prompt;

pub use blog_prompt::BlogPrompt;
pub use block_explanation_prompt::BlockExplanationPrompt;
pub use documentation_prompt::DocumentationPrompt;
