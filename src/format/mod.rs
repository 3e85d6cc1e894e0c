//! Raw LLM markdown to a self-contained styled HTML comment body.
//!
//! Stateless: every call is a pure transformation of its input string plus
//! the static language tables, so concurrent calls need no coordination.
//! The pipeline never fails: malformed input is repaired, unclassifiable
//! code falls back to plain text.

pub mod preprocess;
pub mod render;
pub mod style;

/// Optional metadata about the post a response belongs to. Side-channel
/// only; formatting never depends on it.
#[derive(Debug, Clone, Default)]
pub struct PostContext {
    pub title: String,
    pub language: Option<String>,
    pub author: Option<String>,
}

/// Format a complete AI response into a styled HTML fragment.
///
/// Pipeline: fence repair -> markdown conversion -> heading/code-block
/// decoration -> container assembly. The returned fragment embeds its own
/// stylesheet and carries `data-action`/`data-target-id` attributes for
/// the host page's event-binding layer; it contains no script.
pub fn format_full_response(ai_text: &str, post: Option<&PostContext>) -> String {
    if let Some(post) = post {
        tracing::debug!(title = %post.title, "formatting AI response for post");
    }

    let repaired = preprocess::repair_markdown(ai_text);
    let body = render::render_html(&repaired);

    // The blank lines matter: if this fragment is ever fed back through the
    // formatter, <style> and the content div must each open their own raw
    // HTML block so the whole fragment passes through the markdown
    // converter untouched.
    format!(
        "<div class=\"ai-analysis-report\">\n\n<style>{}</style>\n\n\
         <div class=\"ai-content-body\">\n{}</div>\n</div>\n",
        style::CSS_STYLES,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_still_renders_container() {
        let html = format_full_response("", None);
        assert!(html.contains("ai-analysis-report"));
        assert!(html.contains("<style>"));
        assert!(html.contains("ai-content-body"));
    }

    #[test]
    fn test_post_context_is_optional_metadata() {
        let post = PostContext {
            title: "How do I sort this?".to_string(),
            language: Some("python".to_string()),
            author: Some("alice".to_string()),
        };
        let with = format_full_response("plain text", Some(&post));
        let without = format_full_response("plain text", None);
        assert_eq!(with, without);
    }
}
