//! Markdown-to-HTML conversion with heading and code-block decoration.
//!
//! One pass over the pulldown-cmark event stream: level-2 headings become
//! section-header wrappers (with an icon span when the heading leads with a
//! short emoji token), fenced code blocks become styled containers with a
//! copy button and, for sandboxable languages, a run button. Buttons carry
//! `data-action`/`data-target-id` attributes; the hosting page's script
//! layer binds the behavior. Raw HTML in the input (for instance a
//! previously formatted comment) passes through untouched, so wrappers are
//! never nested.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use pulldown_cmark_escape::escape_html;
use uuid::Uuid;

use crate::language;

/// Convert repaired markdown into decorated HTML.
pub fn render_html(markdown: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);
    let events = decorate(parser);

    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    html
}

fn decorate(parser: Parser<'_>) -> Vec<Event<'_>> {
    let mut out = Vec::new();
    let mut iter = parser.into_iter();

    while let Some(event) = iter.next() {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let declared = match kind {
                    CodeBlockKind::Fenced(tag) => tag.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                let mut content = String::new();
                for ev in iter.by_ref() {
                    match ev {
                        Event::End(TagEnd::CodeBlock) => break,
                        Event::Text(text) => content.push_str(&text),
                        _ => {}
                    }
                }
                out.push(Event::Html(code_container(&declared, &content).into()));
            }
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            }) => {
                let mut inner = Vec::new();
                for ev in iter.by_ref() {
                    if matches!(ev, Event::End(TagEnd::Heading(HeadingLevel::H2))) {
                        break;
                    }
                    inner.push(ev);
                }
                out.push(Event::Html(section_header(inner).into()));
            }
            // Single newlines in LLM prose are intended as line breaks.
            Event::SoftBreak => out.push(Event::HardBreak),
            other => out.push(other),
        }
    }

    out
}

/// Wrap an `##` heading. A leading whitespace-delimited token of at most
/// two characters followed by more text is treated as an icon glyph and
/// split into its own span; headings with inline markup are kept whole.
fn section_header(inner: Vec<Event<'_>>) -> String {
    let mut icon = None;
    let mut title_html = String::new();

    let plain_text = match inner.as_slice() {
        [Event::Text(text)] => Some(text.to_string()),
        _ => None,
    };

    match plain_text {
        Some(text) => {
            let trimmed = text.trim();
            let mut parts = trimmed.splitn(2, char::is_whitespace);
            let first = parts.next().unwrap_or_default();
            let rest = parts.next().map(str::trim).unwrap_or_default();

            let title = if first.chars().count() <= 2 && !rest.is_empty() {
                icon = Some(first.to_string());
                rest
            } else {
                trimmed
            };
            let _ = escape_html(&mut title_html, title);
        }
        None => {
            pulldown_cmark::html::push_html(&mut title_html, inner.into_iter());
        }
    }

    let mut html = String::from("<div class=\"section-header\">");
    if let Some(icon) = icon {
        html.push_str("<span class=\"section-emoji\">");
        let _ = escape_html(&mut html, &icon);
        html.push_str("</span>");
    }
    html.push_str("<h2 class=\"section-title\">");
    html.push_str(&title_html);
    html.push_str("</h2></div>\n");
    html
}

/// Build the styled container for one fenced code block.
fn code_container(declared: &str, content: &str) -> String {
    let tag = if declared.trim().is_empty() || declared == "text" {
        language::fast_detect(content).to_string()
    } else {
        declared.to_string()
    };
    let tag = language::canonical_tag(&tag);
    let label = language::display_name(&tag);
    let runnable = language::is_runnable(&tag);

    // Unique within the rendered document; multiple AI comments may share
    // one page, so a counter would not do.
    let block_id = format!("code-content-{}", Uuid::new_v4().simple());

    let mut html = String::from("<div class=\"code-block-container\">\n<div class=\"code-header\">\n");
    html.push_str(
        "<div class=\"header-dots\"><span class=\"dot red\"></span>\
         <span class=\"dot yellow\"></span><span class=\"dot green\"></span></div>\n",
    );
    html.push_str("<span class=\"code-language\">");
    let _ = escape_html(&mut html, &label);
    html.push_str("</span>\n<div class=\"header-buttons\">\n");

    if runnable {
        html.push_str(&format!(
            "<button class=\"run-btn\" data-action=\"run\" data-target-id=\"{block_id}\" \
             title=\"Run this code\"><span class=\"btn-icon\">\u{25b6}\u{fe0f}</span>\
             <span class=\"btn-text\">Run</span></button>\n"
        ));
    }
    html.push_str(&format!(
        "<button class=\"copy-btn\" data-action=\"copy\" data-target-id=\"{block_id}\" \
         title=\"Copy code\"><span class=\"btn-icon\">\u{1f4cb}</span>\
         <span class=\"btn-text\">Copy</span></button>\n"
    ));
    // Blank line so a re-parse sees the <pre> as its own raw HTML block
    // (kind that survives blank lines inside the code content).
    html.push_str("</div>\n</div>\n\n");

    html.push_str(&format!("<pre><code class=\"language-{tag}\" id=\"{block_id}\">"));
    let _ = escape_html(&mut html, content);
    html.push_str("</code></pre>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h2_emoji_split() {
        let html = render_html("## \u{1f3af} Summary\n\nBody text.\n");
        assert!(html.contains("<span class=\"section-emoji\">\u{1f3af}</span>"));
        assert!(html.contains("<h2 class=\"section-title\">Summary</h2>"));
    }

    #[test]
    fn test_h2_without_icon_kept_whole() {
        let html = render_html("## Overview of the change\n");
        assert!(!html.contains("section-emoji"));
        assert!(html.contains("<h2 class=\"section-title\">Overview of the change</h2>"));
    }

    #[test]
    fn test_h3_untouched() {
        let html = render_html("### Details\n");
        assert!(html.contains("<h3>Details</h3>"));
        assert!(!html.contains("section-header"));
    }

    #[test]
    fn test_code_block_container() {
        let html = render_html("```python\nprint('hi')\n```\n");
        assert!(html.contains("code-block-container"));
        assert!(html.contains("<span class=\"code-language\">PYTHON</span>"));
        assert!(html.contains("data-action=\"copy\""));
        assert!(html.contains("class=\"language-python\""));
    }

    #[test]
    fn test_run_button_gating() {
        let js = render_html("```javascript\nconsole.log(1)\n```\n");
        assert!(js.contains("data-action=\"run\""));

        let sql = render_html("```sql\nSELECT 1;\n```\n");
        assert!(!sql.contains("data-action=\"run\""));

        let cpp = render_html("```cpp\nint main() {}\n```\n");
        assert!(!cpp.contains("data-action=\"run\""));
    }

    #[test]
    fn test_code_content_escaped() {
        let html = render_html("```html\n<div>&amp;</div>\n```\n");
        assert!(html.contains("&lt;div&gt;"));
    }

    #[test]
    fn test_soft_break_becomes_hard_break() {
        let html = render_html("line one\nline two\n");
        assert!(html.contains("<br"));
    }

    #[test]
    fn test_unique_block_ids() {
        let html = render_html("```python\na\n```\n\n```python\nb\n```\n");
        let ids: Vec<&str> = html
            .match_indices("id=\"code-content-")
            .map(|(i, _)| &html[i..i + 50])
            .collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_raw_html_passes_through() {
        let wrapped = "<div class=\"section-header\"><h2 class=\"section-title\">Hi</h2></div>\n";
        let html = render_html(wrapped);
        assert_eq!(html.matches("section-header").count(), 1);
    }
}
