use crate::generation::generation_model::BlogRequest;

pub struct BlogPrompt;

impl BlogPrompt {
    /// Every field of `request` appears exactly once in the returned prompt.
    pub fn get_prompt(request: &BlogRequest) -> String {
        format!(
            r#"You are a professional blog writer. Write a {content_format} blog post for a {audience} audience on the topic "{topic}" within {word_count} words.
Use the following description for context: {description}.
The post is written by {author_name}.

Make sure the post is:
1. Engaging and informative
2. SEO-friendly with proper headings (H1, H2, H3)
3. Well-structured with clear sections
4. Rich in relevant keywords
5. Opened by a compelling introduction and closed by a strong conclusion

Format the output in Markdown."#,
            content_format = request.content_format.label(),
            audience = request.audience.label(),
            topic = request.topic,
            word_count = request.word_count,
            description = request.description,
            author_name = request.author_name,
        )
    }
}
