use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a blog title")]
    MissingTitle,

    #[error("Please enter a blog topic")]
    MissingTopic,

    #[error("Word count {value} is outside the allowed range {min}-{max}")]
    WordCountOutOfRange { value: u32, min: u32, max: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
        };

        tracing::warn!("Request rejected: {}", self);
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Call site of an external request, used to prefix the fault message shown
/// to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultSite {
    BlogGeneration,
    Documentation,
    BlockExplanation,
    FactCheck,
}

impl FaultSite {
    pub fn marker(&self) -> &'static str {
        match self {
            FaultSite::BlogGeneration => "Error generating blog content",
            FaultSite::Documentation => "Error generating documentation",
            FaultSite::BlockExplanation => "Error explaining code block",
            FaultSite::FactCheck => "Error during fact checking",
        }
    }
}

pub fn render_fault(site: FaultSite, fault: &dyn Display) -> String {
    format!("{}: {}", site.marker(), fault)
}
