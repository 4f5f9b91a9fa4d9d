use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::ValidationError;

pub const MIN_WORD_COUNT: u32 = 300;
pub const MAX_WORD_COUNT: u32 = 2000;
pub const DEFAULT_WORD_COUNT: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlogType {
    #[default]
    #[serde(rename = "General Blog")]
    GeneralBlog,
    #[serde(rename = "Project Documentation")]
    ProjectDocumentation,
    #[serde(rename = "Technical Tutorial")]
    TechnicalTutorial,
}

impl BlogType {
    pub const ALL: [BlogType; 3] = [
        BlogType::GeneralBlog,
        BlogType::ProjectDocumentation,
        BlogType::TechnicalTutorial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BlogType::GeneralBlog => "General Blog",
            BlogType::ProjectDocumentation => "Project Documentation",
            BlogType::TechnicalTutorial => "Technical Tutorial",
        }
    }

    pub fn is_documentation(&self) -> bool {
        matches!(self, BlogType::ProjectDocumentation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Audience {
    #[serde(rename = "Researchers")]
    Researchers,
    #[serde(rename = "Data Scientists")]
    DataScientists,
    #[default]
    #[serde(rename = "General Audience")]
    GeneralAudience,
    #[serde(rename = "Software Engineers")]
    SoftwareEngineers,
    #[serde(rename = "Product Managers")]
    ProductManagers,
    #[serde(rename = "Marketing Professionals")]
    MarketingProfessionals,
}

impl Audience {
    pub const ALL: [Audience; 6] = [
        Audience::Researchers,
        Audience::DataScientists,
        Audience::GeneralAudience,
        Audience::SoftwareEngineers,
        Audience::ProductManagers,
        Audience::MarketingProfessionals,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Audience::Researchers => "Researchers",
            Audience::DataScientists => "Data Scientists",
            Audience::GeneralAudience => "General Audience",
            Audience::SoftwareEngineers => "Software Engineers",
            Audience::ProductManagers => "Product Managers",
            Audience::MarketingProfessionals => "Marketing Professionals",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentFormat {
    #[default]
    #[serde(rename = "How-to/Tutorial")]
    HowToTutorial,
    #[serde(rename = "Opinion Piece")]
    OpinionPiece,
    #[serde(rename = "Case Study")]
    CaseStudy,
    #[serde(rename = "Technical Guide")]
    TechnicalGuide,
    #[serde(rename = "Problem-Solution")]
    ProblemSolution,
    #[serde(rename = "Comparison")]
    Comparison,
}

impl ContentFormat {
    pub const ALL: [ContentFormat; 6] = [
        ContentFormat::HowToTutorial,
        ContentFormat::OpinionPiece,
        ContentFormat::CaseStudy,
        ContentFormat::TechnicalGuide,
        ContentFormat::ProblemSolution,
        ContentFormat::Comparison,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentFormat::HowToTutorial => "How-to/Tutorial",
            ContentFormat::OpinionPiece => "Opinion Piece",
            ContentFormat::CaseStudy => "Case Study",
            ContentFormat::TechnicalGuide => "Technical Guide",
            ContentFormat::ProblemSolution => "Problem-Solution",
            ContentFormat::Comparison => "Comparison",
        }
    }
}

impl fmt::Display for BlogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRequest {
    pub topic: String,
    #[serde(default = "default_word_count")]
    pub word_count: u32,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content_format: ContentFormat,
}

fn default_word_count() -> u32 {
    DEFAULT_WORD_COUNT
}

impl BlogRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.topic.trim().is_empty() {
            return Err(ValidationError::MissingTopic);
        }
        validate_word_count(self.word_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationRequest {
    #[serde(default)]
    pub source_text: String,
    #[serde(default)]
    pub description: String,
}

/// Explanation of one segmented block. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockExplanation {
    pub index: usize,
    pub source_block: String,
    pub explanation_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDocument {
    pub markdown_text: String,
}

impl GeneratedDocument {
    pub fn new(markdown_text: impl Into<String>) -> Self {
        Self {
            markdown_text: markdown_text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub request_id: Uuid,
    pub title: String,
    pub document: GeneratedDocument,
    pub download_file_name: String,
    /// Present for blog modes only.
    pub fact_check: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// A validated submission, ready to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Blog(BlogRequest),
    Documentation(DocumentationRequest),
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        Err(ValidationError::MissingTitle)
    } else {
        Ok(())
    }
}

pub fn validate_word_count(word_count: u32) -> Result<(), ValidationError> {
    if (MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&word_count) {
        Ok(())
    } else {
        Err(ValidationError::WordCountOutOfRange {
            value: word_count,
            min: MIN_WORD_COUNT,
            max: MAX_WORD_COUNT,
        })
    }
}

pub fn download_file_name(title: &str) -> String {
    format!("{}.md", title)
}
