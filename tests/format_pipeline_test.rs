//! End-to-end tests for the response formatting pipeline.

use devally::format::{format_full_response, preprocess, PostContext};
use devally::language;

/// Truncated LLM output: no language tag, no closing fence.
const TRUNCATED_RESPONSE: &str = "## \u{1f3af} Summary\nHere is a fix.\n```\nfunction add(a, b) {\n  return a + b\n";

#[test]
fn truncated_untagged_response_renders_fully() {
    let html = format_full_response(TRUNCATED_RESPONSE, None);

    // Heading split into icon + title.
    assert!(html.contains("<span class=\"section-emoji\">\u{1f3af}</span>"));
    assert!(html.contains("<h2 class=\"section-title\">Summary</h2>"));

    // Fence detected as javascript and closed, so the code renders as a
    // decorated block rather than swallowing the rest of the document.
    assert!(html.contains("class=\"language-javascript\""));
    assert!(html.contains("<span class=\"code-language\">JAVASCRIPT</span>"));
    assert!(html.contains("function add(a, b)"));

    // javascript is runnable: both actions present.
    assert!(html.contains("data-action=\"copy\""));
    assert!(html.contains("data-action=\"run\""));
    assert!(html.contains("data-target-id=\"code-content-"));
}

#[test]
fn fence_count_is_even_after_preprocess() {
    let inputs = [
        TRUNCATED_RESPONSE,
        "```\nx",
        "text\n```python\nprint(1)\n```\n```\ny",
        "no fences",
    ];
    for input in inputs {
        let repaired = preprocess::repair_markdown(input);
        let fences = repaired
            .lines()
            .filter(|l| l.trim().starts_with("```"))
            .count();
        assert_eq!(fences % 2, 0, "input {input:?}");
    }
}

#[test]
fn distinct_blocks_get_distinct_ids() {
    let markdown = "```python\na = 1\n```\n\ntext\n\n```go\npackage main\n```\n\n```sql\nSELECT 1;\n```\n";
    let html = format_full_response(markdown, None);

    let ids: Vec<&str> = html
        .split("data-target-id=\"")
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap())
        .collect();
    // python (copy+run) + go (copy) + sql (copy) button targets.
    assert_eq!(ids.len(), 4);

    let mut unique: Vec<&str> = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 3, "one id per code block");
}

#[test]
fn formatting_twice_does_not_nest_wrappers() {
    let markdown = "## \u{1f527} Fix\n\n```python\nprint('x')\n```\n";
    let once = format_full_response(markdown, None);
    let twice = format_full_response(&once, None);

    for marker in ["code-block-container", "section-header", "<pre>"] {
        assert_eq!(
            strip_css(&once).matches(marker).count(),
            strip_css(&twice).matches(marker).count(),
            "marker {marker}"
        );
    }
}

// The embedded stylesheet itself mentions the wrapper class names; strip
// the style blocks before counting markup occurrences.
fn strip_css(html: &str) -> String {
    let mut out = String::new();
    let mut rest = html;
    while let Some(start) = rest.find("<style>") {
        out.push_str(&rest[..start]);
        match rest[start..].find("</style>") {
            Some(end) => rest = &rest[start + end + "</style>".len()..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

#[test]
fn runnable_gating_by_language() {
    let js = format_full_response("```javascript\nconsole.log(1)\n```\n", None);
    assert!(js.contains("data-action=\"run\""));

    let py = format_full_response("```python\nprint(1)\n```\n", None);
    assert!(py.contains("data-action=\"run\""));

    let sql = format_full_response("```sql\nSELECT 1;\n```\n", None);
    assert!(!sql.contains("data-action=\"run\""));

    let cpp = format_full_response("```cpp\n#include <iostream>\n```\n", None);
    assert!(!cpp.contains("data-action=\"run\""));
}

#[test]
fn classifier_properties() {
    // Determinism.
    let snippet = "def f():\n    return 1\n";
    assert_eq!(language::classify(snippet), language::classify(snippet));

    // Fallbacks.
    assert_eq!(language::classify(""), "text");
    assert_eq!(language::classify("plain prose with no code"), "text");

    // JSON precedence over keywords.
    assert_eq!(language::classify("{\"a\": 1, \"b\": [1,2,3]}"), "json");

    // Single ambiguous token stays under the confidence threshold.
    assert_eq!(language::classify("var "), "text");
}

#[test]
fn alias_normalization_is_idempotent() {
    for alias in ["js", "py", "ts", "sh", "shell", "jsx", "tsx", "c++", "rb"] {
        let once = language::canonical_tag(alias);
        assert_eq!(language::canonical_tag(&once), once, "alias {alias}");
    }
}

#[test]
fn shorthand_fence_tags_are_canonicalized() {
    let html = format_full_response("```js\nconsole.log(1)\n```\n", None);
    assert!(html.contains("class=\"language-javascript\""));
    assert!(!html.contains("class=\"language-js\""));
}

#[test]
fn empty_and_whitespace_inputs_never_panic() {
    for input in ["", " ", "\n\n\n", "```", "``` \n", "##", "## "] {
        let html = format_full_response(input, None);
        assert!(html.contains("ai-analysis-report"), "input {input:?}");
    }
}

#[test]
fn post_context_does_not_change_output() {
    let post = PostContext {
        title: "Weird bug in my loop".to_string(),
        language: Some("go".to_string()),
        author: Some("bob".to_string()),
    };
    let markdown = "Some **bold** advice.";
    assert_eq!(
        format_full_response(markdown, Some(&post)),
        format_full_response(markdown, None)
    );
}
