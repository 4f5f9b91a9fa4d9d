use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Form, Router,
};
use maud::Markup;
use serde::Deserialize;
use uuid::Uuid;

use super::form::{normalize_line_endings, GenerationForm};
use super::pages::render_page;
use crate::app_module::AppState;
use crate::generation::generation_model::download_file_name;

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

pub fn presentation_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(submit_form))
        .route("/download", post(download_markdown))
        .with_state(())
}

pub async fn index() -> Markup {
    render_page(&GenerationForm::default(), None, None)
}

/// Validation faults re-render the form with a warning; no external request
/// is made in that case.
pub async fn submit_form(
    Extension(ctx): Extension<AppState>,
    Form(form): Form<GenerationForm>,
) -> Response {
    let submission = match form.to_submission() {
        Ok(submission) => submission,
        Err(e) => {
            tracing::warn!("Form rejected: {}", e);
            let page = render_page(&form, Some(&e.to_string()), None);
            return (StatusCode::UNPROCESSABLE_ENTITY, page).into_response();
        }
    };

    let outcome = ctx
        .service
        .generation_service
        .execute(Uuid::new_v4(), &form.title, &submission)
        .await;

    render_page(&form, None, Some(&outcome)).into_response()
}

pub async fn download_markdown(Form(form): Form<DownloadForm>) -> Response {
    let content = normalize_line_endings(&form.content);
    let file_name = download_file_name(&form.title);

    (
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/markdown; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, content_disposition(&file_name)),
        ],
        content.into_bytes(),
    )
        .into_response()
}

/// Builds an attachment disposition with an ASCII fallback name and the exact
/// UTF-8 name in `filename*`.
fn content_disposition(file_name: &str) -> HeaderValue {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c == ' ' || (c.is_ascii_graphic() && c != '"' && c != '\\') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let value = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(file_name)
    );

    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_title_is_used_verbatim() {
        let value = content_disposition("My Post.md");
        assert_eq!(
            value.to_str().unwrap(),
            "attachment; filename=\"My Post.md\"; filename*=UTF-8''My%20Post.md"
        );
    }

    #[test]
    fn non_ascii_and_quotes_are_replaced_in_fallback() {
        let value = content_disposition("Café \"quoted\".md");
        let text = value.to_str().unwrap();
        assert!(text.starts_with("attachment; filename=\"Caf_ _quoted_.md\""));
        assert!(text.ends_with("filename*=UTF-8''Caf%C3%A9%20%22quoted%22.md"));
    }
}
