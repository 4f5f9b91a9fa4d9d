use axum::{routing::post, Extension, Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use super::generation_model::{
    validate_title, BlogRequest, DocumentationRequest, GenerationOutcome, Submission,
};
use crate::app_module::AppState;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct GenerateBlogPayload {
    pub title: String,
    #[serde(flatten)]
    pub request: BlogRequest,
}

#[derive(Debug, Deserialize)]
pub struct GenerateDocumentationPayload {
    pub title: String,
    #[serde(flatten)]
    pub request: DocumentationRequest,
}

pub fn generation_router() -> Router {
    Router::new()
        .route("/v1/blog/generate", post(generate_blog))
        .route("/v1/documentation/generate", post(generate_documentation))
        .with_state(())
}

pub async fn generate_blog(
    Extension(ctx): Extension<AppState>,
    Json(payload): Json<GenerateBlogPayload>,
) -> Result<Json<GenerationOutcome>, AppError> {
    validate_title(&payload.title)?;
    payload.request.validate()?;

    let outcome = ctx
        .service
        .generation_service
        .execute(
            Uuid::new_v4(),
            &payload.title,
            &Submission::Blog(payload.request),
        )
        .await;

    Ok(Json(outcome))
}

pub async fn generate_documentation(
    Extension(ctx): Extension<AppState>,
    Json(payload): Json<GenerateDocumentationPayload>,
) -> Result<Json<GenerationOutcome>, AppError> {
    validate_title(&payload.title)?;

    let outcome = ctx
        .service
        .generation_service
        .execute(
            Uuid::new_v4(),
            &payload.title,
            &Submission::Documentation(payload.request),
        )
        .await;

    Ok(Json(outcome))
}
