use serde::Deserialize;

use crate::error::ValidationError;
use crate::generation::generation_model::{
    validate_title, Audience, BlogRequest, BlogType, ContentFormat, DocumentationRequest,
    Submission, DEFAULT_WORD_COUNT,
};

/// Raw fields of the generator form, as posted by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerationForm {
    pub blog_type: BlogType,
    pub author_name: String,
    pub title: String,
    pub topic: String,
    pub description: String,
    pub project_code: String,
    pub word_count: u32,
    pub audience: Audience,
    pub content_format: ContentFormat,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            blog_type: BlogType::default(),
            author_name: String::new(),
            title: String::new(),
            topic: String::new(),
            description: String::new(),
            project_code: String::new(),
            word_count: DEFAULT_WORD_COUNT,
            audience: Audience::default(),
            content_format: ContentFormat::default(),
        }
    }
}

impl GenerationForm {
    /// Validates the fields relevant to the selected blog type and builds the
    /// request for the matching workflow.
    pub fn to_submission(&self) -> Result<Submission, ValidationError> {
        validate_title(&self.title)?;

        if self.blog_type.is_documentation() {
            return Ok(Submission::Documentation(DocumentationRequest {
                source_text: normalize_line_endings(&self.project_code),
                description: normalize_line_endings(&self.description),
            }));
        }

        let request = BlogRequest {
            topic: self.topic.clone(),
            word_count: self.word_count,
            audience: self.audience,
            author_name: self.author_name.clone(),
            description: normalize_line_endings(&self.description),
            content_format: self.content_format,
        };
        request.validate()?;

        Ok(Submission::Blog(request))
    }
}

/// Browsers submit textarea content with CRLF line endings.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}
