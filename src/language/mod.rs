//! Heuristic language classification for code snippets.
//!
//! LLM responses frequently arrive with missing or sloppy fence tags. This
//! module turns a blob of code into a best-guess canonical tag: a weighted
//! keyword scorer over a fixed candidate table, with structural detectors
//! for JSON and CSS layered on top, and a cheap first-pass detector for the
//! common case. Results only drive syntax-highlight labels and the Run
//! button, so a confident `"text"` beats a wrong guess.

pub mod fastpath;
pub mod patterns;

use once_cell::sync::Lazy;
use regex::Regex;

pub use fastpath::fast_detect;
use patterns::PATTERN_TABLE;

/// Tag returned when no language is confidently detected.
pub const FALLBACK_TAG: &str = "text";

/// Forced score for structurally valid JSON. JSON has almost no keywords,
/// so the structural check outranks keyword scoring.
const JSON_STRUCTURAL_SCORE: u32 = 15;

/// Bonus for content shaped like `selector { property: value; }`.
const CSS_STRUCTURAL_BONUS: u32 = 10;

/// Winning score below this returns [`FALLBACK_TAG`] instead of a guess.
const MIN_CONFIDENCE: u32 = 6;

static CSS_RULE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9\-\.#\s]+\s*\{\s*[a-zA-Z\-]+\s*:\s*[^;]+;").expect("css rule regex")
});

/// Alias table mapping shorthand fence tags to canonical identifiers.
/// Values are canonical and never appear as keys, which keeps
/// [`canonical_tag`] idempotent.
const ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("vue", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("sh", "bash"),
    ("shell", "bash"),
    ("yml", "yaml"),
    ("md", "markdown"),
    ("c++", "cpp"),
    ("cs", "csharp"),
    ("kt", "kotlin"),
    ("rs", "rust"),
    ("rb", "ruby"),
];

/// Languages the hosting page may offer to execute in a sandbox. Deliberate
/// safety boundary: checked after alias normalization, never widened from
/// fence input.
const RUNNABLE: &[&str] = &["javascript", "python"];

/// Normalize a raw fence tag to its canonical lowercase form.
pub fn canonical_tag(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    for (alias, canonical) in ALIASES {
        if lower == *alias {
            return (*canonical).to_string();
        }
    }
    lower
}

/// Human-readable label for a canonical tag.
pub fn display_name(tag: &str) -> String {
    match tag.to_lowercase().as_str() {
        "cpp" => "C++".to_string(),
        "csharp" => "C#".to_string(),
        other => other.to_uppercase(),
    }
}

/// Whether the UI is allowed to offer in-browser execution for this tag.
pub fn is_runnable(tag: &str) -> bool {
    RUNNABLE.contains(&tag.to_lowercase().as_str())
}

/// Per-call score accumulator over the candidate table. Scores start at
/// zero and only increase within one classification pass.
struct Scoreboard {
    scores: Vec<(&'static str, u32)>,
}

impl Scoreboard {
    fn new() -> Self {
        Self {
            scores: PATTERN_TABLE.iter().map(|lp| (lp.tag, 0)).collect(),
        }
    }

    fn add(&mut self, tag: &str, weight: u32) {
        if let Some(entry) = self.scores.iter_mut().find(|(t, _)| *t == tag) {
            entry.1 += weight;
        }
    }

    fn set(&mut self, tag: &str, score: u32) {
        if let Some(entry) = self.scores.iter_mut().find(|(t, _)| *t == tag) {
            entry.1 = score;
        }
    }

    /// First entry holding the maximum score, in table order.
    fn winner(&self) -> (&'static str, u32) {
        let mut best = ("", 0);
        for &(tag, score) in &self.scores {
            if score > best.1 {
                best = (tag, score);
            }
        }
        best
    }
}

/// Weighted keyword classification. Each registered pattern contributes its
/// weight exactly once if it occurs anywhere in the (lowercased) input;
/// occurrences are not counted. Returns [`FALLBACK_TAG`] when the winning
/// score is below the confidence threshold.
pub fn classify(code: &str) -> &'static str {
    if code.trim().is_empty() {
        return FALLBACK_TAG;
    }

    let lower = code.to_lowercase();
    let mut board = Scoreboard::new();

    for lang in PATTERN_TABLE {
        for &(pattern, weight) in lang.patterns {
            if lower.contains(pattern) {
                board.add(lang.tag, weight);
            }
        }
    }

    // Structural passes run after keyword scoring: JSON overrides, CSS adds.
    if is_json_structure(code) {
        board.set("json", JSON_STRUCTURAL_SCORE);
    }
    if has_css_structure(code) {
        board.add("css", CSS_STRUCTURAL_BONUS);
    }

    let (tag, score) = board.winner();
    if score >= MIN_CONFIDENCE {
        tracing::debug!(tag, score, "classified code block");
        tag
    } else {
        FALLBACK_TAG
    }
}

/// Resolve a tag for unlabeled content: cheap pass first, weighted scorer
/// when that is inconclusive.
pub fn detect(code: &str) -> &'static str {
    let fast = fast_detect(code);
    if fast != FALLBACK_TAG {
        return fast;
    }
    classify(code)
}

/// Balanced-bracket shape plus a successful parse. A failed parse just
/// means "not JSON".
fn is_json_structure(code: &str) -> bool {
    let trimmed = code.trim();
    let shaped = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    shaped && serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
}

fn has_css_structure(code: &str) -> bool {
    CSS_RULE_RE.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_deterministic() {
        let code = "def main():\n    print('hi')\n";
        assert_eq!(classify(code), classify(code));
    }

    #[test]
    fn test_empty_returns_text() {
        assert_eq!(classify(""), "text");
        assert_eq!(classify("   \n\t "), "text");
    }

    #[test]
    fn test_no_matches_returns_text() {
        assert_eq!(classify("lorem ipsum dolor sit amet"), "text");
    }

    #[test]
    fn test_json_precedence_over_keywords() {
        assert_eq!(classify("{\"a\": 1, \"b\": [1,2,3]}"), "json");
    }

    #[test]
    fn test_malformed_json_is_not_json() {
        // Shaped like JSON but does not parse; no keyword reaches the
        // threshold either.
        assert_eq!(classify("{not json at all}"), "text");
    }

    #[test]
    fn test_below_threshold_returns_text() {
        // `var ` alone scores 2 wherever it appears, under the threshold of 6.
        assert_eq!(classify("var "), "text");
    }

    #[test]
    fn test_go_snippet() {
        let code = "package main\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n";
        assert_eq!(classify(code), "go");
    }

    #[test]
    fn test_rust_snippet() {
        let code = "use std::fmt;\n\nfn main() {\n    let mut x = 1;\n    println!(\"{x}\");\n}";
        assert_eq!(classify(code), "rust");
    }

    #[test]
    fn test_css_structural_bonus() {
        let code = ".card {\n  color: red;\n  padding: 4px;\n}";
        assert_eq!(classify(code), "css");
    }

    #[test]
    fn test_sql_snippet() {
        let code = "SELECT id, name FROM users WHERE active = 1 GROUP BY name";
        assert_eq!(classify(code), "sql");
    }

    #[test]
    fn test_shebang_is_bash() {
        assert_eq!(classify("#!/bin/sh\necho hello\ngrep foo bar.txt"), "bash");
    }

    #[test]
    fn test_canonical_tag_aliases() {
        assert_eq!(canonical_tag("js"), "javascript");
        assert_eq!(canonical_tag("TS"), "typescript");
        assert_eq!(canonical_tag("py"), "python");
        assert_eq!(canonical_tag("shell"), "bash");
        assert_eq!(canonical_tag("C++"), "cpp");
        assert_eq!(canonical_tag("ruby"), "ruby");
    }

    #[test]
    fn test_canonical_tag_idempotent() {
        for (alias, _) in super::ALIASES {
            let once = canonical_tag(alias);
            assert_eq!(canonical_tag(&once), once, "alias {alias}");
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name("cpp"), "C++");
        assert_eq!(display_name("csharp"), "C#");
        assert_eq!(display_name("javascript"), "JAVASCRIPT");
        assert_eq!(display_name("zig"), "ZIG");
    }

    #[test]
    fn test_runnable_allow_list() {
        assert!(is_runnable("javascript"));
        assert!(is_runnable("python"));
        assert!(!is_runnable("sql"));
        assert!(!is_runnable("cpp"));
        assert!(!is_runnable("bash"));
    }

    #[test]
    fn test_detect_prefers_fast_path() {
        assert_eq!(detect("console.log('x')"), "javascript");
    }

    #[test]
    fn test_detect_falls_back_to_scorer() {
        // No cheap hint matches, but the weighted table knows Go.
        assert_eq!(detect("package main\nfunc main() {}\nfmt.Println(1)"), "go");
    }
}
