//! Cheap first-pass language detection.
//!
//! Unweighted any-pattern-present checks in a fixed priority order, returning
//! on the first category with a hit. Used where a quick answer is enough
//! (fence repair, display-label fallback); the weighted scorer in the parent
//! module is the canonical algorithm when this pass is inconclusive.

const JS_HINTS: &[&str] = &[
    "console.log",
    "function(",
    "function ",
    "=>",
    "const ",
    "let ",
    "var ",
    "document.",
    "window.",
    ".addeventlistener",
    "require(",
    "import ",
    "export ",
    "async ",
    "await ",
];

const TS_HINTS: &[&str] = &[
    "interface ",
    "type ",
    ": string",
    ": number",
    ": boolean",
    "<t>",
    "extends ",
    "implements ",
];

const PYTHON_HINTS: &[&str] = &[
    "def ",
    "import ",
    "from ",
    "print(",
    "if __name__",
    "self.",
    "class ",
    "elif ",
    "isinstance(",
    "len(",
];

const HTML_HINTS: &[&str] = &[
    "<html", "<head", "<body", "<div", "<span", "<p>", "<!doctype", "<script", "<style", "<link",
];

// A bare `{`/`:` shape is not enough to call CSS (JSON and object literals
// share it); require at least one property token as well.
const CSS_HINTS: &[&str] = &[
    "background:",
    "color:",
    "font-",
    "margin:",
    "padding:",
    "width:",
    "height:",
    "display:",
    "position:",
];

// Tokens that rule CSS out: object literals share the brace/colon shape.
const CSS_VETO: &[&str] = &["function", "console", "var ", "let "];

const SQL_HINTS: &[&str] = &[
    "select ",
    "from ",
    "where ",
    "insert ",
    "update ",
    "delete ",
    "create table",
    "alter table",
    "drop table",
];

const SHELL_HINTS: &[&str] = &[
    "#!/bin/", "echo ", "cd ", "ls ", "mkdir ", "rm ", "grep ", "sed ", "awk ", "curl ", "wget ",
];

fn any_hit(haystack: &str, hints: &[&str]) -> bool {
    hints.iter().any(|h| haystack.contains(h))
}

/// Best-effort tag from a single pass over the content. Returns `"text"`
/// when nothing matches.
pub fn fast_detect(code: &str) -> &'static str {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return "text";
    }
    let lower = trimmed.to_lowercase();

    if any_hit(&lower, JS_HINTS) {
        if any_hit(&lower, TS_HINTS) {
            return "typescript";
        }
        return "javascript";
    }

    if any_hit(&lower, PYTHON_HINTS) {
        return "python";
    }

    if any_hit(&lower, HTML_HINTS) {
        return "html";
    }

    if any_hit(&lower, CSS_HINTS) && !any_hit(&lower, CSS_VETO) {
        return "css";
    }

    if (lower.starts_with('{') && lower.ends_with('}'))
        || (lower.starts_with('[') && lower.ends_with(']'))
    {
        return "json";
    }

    if any_hit(&lower, SQL_HINTS) {
        return "sql";
    }

    if any_hit(&lower, SHELL_HINTS) {
        return "bash";
    }

    "text"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_before_python() {
        // `import ` is on both hint lists; JS is checked first.
        assert_eq!(fast_detect("import { api } from './api'"), "javascript");
    }

    #[test]
    fn test_ts_subcheck_nested_in_js() {
        assert_eq!(
            fast_detect("const x: string = 'a';\nlet y = 1;"),
            "typescript"
        );
    }

    #[test]
    fn test_python() {
        assert_eq!(fast_detect("def add(a, b):\n    return a + b"), "python");
    }

    #[test]
    fn test_object_literal_hits_js_first() {
        assert_eq!(fast_detect("var style = { color: 'red' };"), "javascript");
    }

    #[test]
    fn test_css_vetoed_by_js_tokens() {
        // Property token present, but `console` rules CSS out and no JS
        // hint matches either.
        assert_eq!(fast_detect("console.error({ color: 'red' })"), "text");
    }

    #[test]
    fn test_css_shape() {
        assert_eq!(fast_detect(".card { margin: 0; }"), "css");
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(fast_detect("{\"a\": 1}"), "json");
    }

    #[test]
    fn test_empty_is_text() {
        assert_eq!(fast_detect(""), "text");
        assert_eq!(fast_detect("   \n  "), "text");
    }
}
