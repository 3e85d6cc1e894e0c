//! Line-oriented repair of raw LLM markdown before conversion.
//!
//! LLM output is *supposed* to be GFM but routinely is not: fences without
//! language tags, shorthand tags, or a truncated response that never closes
//! its last fence. This pass rewrites fence lines so the converter and the
//! code-block decorator downstream always see a closed fence with a
//! canonical tag.

use crate::language;

/// Tags that carry no highlighting information; treated like a missing tag.
const NON_INFORMATIVE_TAGS: &[&str] = &["", "text", "plain", "code"];

fn fence_tag(stripped: &str) -> &str {
    let rest = &stripped[3..];
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '+' || c == '#'))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Rewrite fence lines: resolve missing/uninformative tags by classifying
/// the fenced content, normalize shorthand tags, and close any fence left
/// open at end of input.
pub fn repair_markdown(input: &str) -> String {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len() + 1);
    let mut in_fence = false;

    for (i, line) in lines.iter().enumerate() {
        let stripped = line.trim();

        if !stripped.starts_with("```") {
            out.push((*line).to_string());
            continue;
        }

        if in_fence {
            in_fence = false;
            out.push("```".to_string());
            continue;
        }

        in_fence = true;
        let declared = fence_tag(stripped).to_lowercase();

        if NON_INFORMATIVE_TAGS.contains(&declared.as_str()) {
            // Look ahead to the closing fence (or EOF) and classify.
            let body: Vec<&str> = lines[i + 1..]
                .iter()
                .take_while(|l| !l.trim().starts_with("```"))
                .copied()
                .collect();
            let resolved = language::canonical_tag(language::detect(&body.join("\n")));
            tracing::debug!(%resolved, "resolved unlabeled fence");
            out.push(format!("```{resolved}"));
        } else {
            out.push(format!("```{}", language::canonical_tag(&declared)));
        }
    }

    if in_fence {
        tracing::debug!("closing unterminated fence at end of input");
        out.push("```".to_string());
    }

    out.join("\n")
}
