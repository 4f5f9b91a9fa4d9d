//! Server-rendered HTML for the generator page.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use pulldown_cmark::{html as md_html, Event, Options, Parser};

use super::form::GenerationForm;
use crate::generation::generation_model::{
    Audience, BlogType, ContentFormat, GenerationOutcome, MAX_WORD_COUNT, MIN_WORD_COUNT,
};

pub const MEDIUM_NEW_STORY_URL: &str = "https://medium.com/new-story";

const PAGE_TITLE: &str = "Professional Blog Generator";

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 2rem; color: #1f1f1f; }
label { display: block; font-weight: 600; margin-top: 1rem; }
input[type=text], textarea, select { width: 100%; padding: .5rem; box-sizing: border-box; }
textarea.code { font-family: ui-monospace, monospace; }
.columns { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.actions { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin: 1.5rem 0; }
button { width: 100%; padding: .6rem; cursor: pointer; }
.warning { background: #fff4ce; border: 1px solid #e0b400; padding: .75rem; margin: 1rem 0; }
.medium-btn { display: block; text-align: center; background: #1a8917; color: #fff; padding: .6rem; border-radius: 4px; text-decoration: none; }
.generated { border-top: 1px solid #ddd; margin-top: 2rem; }
.hint { font-weight: normal; color: #666; }
"#;

/// Renders Markdown to HTML. Raw HTML in the source is escaped, not passed
/// through.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    body_html
}

pub fn render_page(
    form: &GenerationForm,
    warning: Option<&str>,
    outcome: Option<&GenerationOutcome>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Blog Generator Pro" }
                style { (PreEscaped(CSS)) }
            }
            body {
                h1 { (PAGE_TITLE) }
                @if let Some(message) = warning {
                    div.warning role="alert" { (message) }
                }
                (render_form(form))
                @if let Some(outcome) = outcome {
                    (render_outcome(outcome))
                }
                hr;
                (render_publish_guide())
            }
        }
    }
}

fn render_form(form: &GenerationForm) -> Markup {
    html! {
        form method="post" action="/generate" {
            label for="blog_type" { "Blog Type" }
            select id="blog_type" name="blog_type" {
                @for blog_type in BlogType::ALL {
                    option value=(blog_type.label()) selected[blog_type == form.blog_type] {
                        (blog_type.label())
                    }
                }
            }

            label for="author_name" { "Author Name" }
            input type="text" id="author_name" name="author_name" value=(form.author_name);

            label for="title" { "Blog Title" }
            input type="text" id="title" name="title" value=(form.title);

            label for="topic" {
                "Blog Topic "
                span.hint { "(blog types only)" }
            }
            input type="text" id="topic" name="topic" value=(form.topic);

            label for="description" { "Topic / Project Description" }
            textarea id="description" name="description" rows="4" { (form.description) }

            label for="project_code" {
                "Project Code "
                span.hint { "(Project Documentation only; blocks are separated by blank lines)" }
            }
            textarea.code id="project_code" name="project_code" rows="12" { (form.project_code) }

            div.columns {
                div {
                    label for="word_count" { "Word Count: " output { (form.word_count) } }
                    input type="range" id="word_count" name="word_count"
                        min=(MIN_WORD_COUNT) max=(MAX_WORD_COUNT) value=(form.word_count);
                }
                div {
                    label for="audience" { "Target Audience" }
                    select id="audience" name="audience" {
                        @for audience in Audience::ALL {
                            option value=(audience.label()) selected[audience == form.audience] {
                                (audience.label())
                            }
                        }
                    }
                }
                div {
                    label for="content_format" { "Content Format" }
                    select id="content_format" name="content_format" {
                        @for content_format in ContentFormat::ALL {
                            option value=(content_format.label())
                                selected[content_format == form.content_format] {
                                (content_format.label())
                            }
                        }
                    }
                }
            }

            p { button type="submit" { "Generate Blog" } }
        }
    }
}

fn render_outcome(outcome: &GenerationOutcome) -> Markup {
    html! {
        section.generated {
            h2 { "Generated Blog" }
            article {
                (PreEscaped(render_markdown(&outcome.document.markdown_text)))
            }
            div.actions {
                form method="post" action="/download" {
                    input type="hidden" name="title" value=(outcome.title);
                    textarea name="content" hidden { (outcome.document.markdown_text) }
                    button type="submit" { "Download as Markdown (" (outcome.download_file_name) ")" }
                }
                a.medium-btn href=(MEDIUM_NEW_STORY_URL) target="_blank" rel="noopener" {
                    "Publish to Medium"
                }
            }
            @if let Some(fact_check) = &outcome.fact_check {
                h2 { "Fact-Checked Information" }
                p.fact-check { (fact_check) }
            }
        }
    }
}

fn render_publish_guide() -> Markup {
    let steps = [
        "Click the 'Publish to Medium' button above",
        "Sign in to your Medium account if needed",
        "Copy the generated content from above",
        "Paste the content into Medium's editor",
        "Add your cover image directly in Medium's editor",
        "Review and format your content",
        "Click 'Publish' when ready",
    ];

    html! {
        section.guide {
            h3 { "How to Publish on Medium" }
            ol {
                @for step in steps {
                    li { (step) }
                }
            }
        }
    }
}
