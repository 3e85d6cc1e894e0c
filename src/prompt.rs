//! Instruction text sent to the LLM for each review task.
//!
//! Every narrated task shares a fixed system preamble that pins the output
//! contract the formatter depends on: GitHub-flavored Markdown, all code
//! inside fenced blocks, canonical language identifiers. Raw-output tasks
//! (refactor, title generation, free-form code generation) skip the
//! preamble entirely and constrain the model to bare code or a bare title,
//! because their consumers do not render markdown.

use std::fmt;
use std::str::FromStr;

/// Output contract preamble prepended to every narrated task prompt.
const SYSTEM_PREAMBLE: &str = "\
You are DevAlly, a professional programming assistant embedded in a \
developer discussion board. You explain, debug, optimize, generate, and \
review code for the community.

Formatting rules (mandatory):
- Respond in GitHub Flavored Markdown.
- Put ALL code inside fenced code blocks (```).
- Tag every fence with a canonical language identifier: `javascript` not \
`js`, `python` not `py`, `typescript` not `ts`, `bash` not `sh`.
- Be clear, concise, and direct; stay focused on the request.
";

/// Review task requested for a post, one variant per task with only the
/// fields that task needs. Wire ids (used by the chat UI and the CLI) are
/// given by [`TaskType::wire_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskType {
    /// Explain the intent and control flow of the post's code. Default
    /// task, and the fallback for unknown wire ids.
    ExplainCodeFlow,
    /// Generate a sample snippet implementing the named functionality.
    GenerateSnippet { functionality: String },
    /// Find bugs and propose fixes.
    DebugCode,
    /// Suggest performance improvements.
    OptimizePerformance,
    /// Aggregate overview of a list of posts.
    SummarizePostList,
    /// Write unit/integration tests for the code.
    GenerateTests,
    /// OWASP-style security review.
    SecurityAudit,
    /// Translate the code into another language.
    TranslateCode { target_language: String },
    /// Suggest a CI/CD pipeline for the named platform.
    CicdIntegration { platform: String },
    /// Cross-post code quality audit.
    QualityAudit,
    /// Apply a reviewer recommendation and return only the rewritten code.
    RefactorWithRecommendation { recommendation: String },
    /// Produce a short post title from the code. Raw output.
    GenerateTitle,
    /// Generate code from a free-form description. Raw output.
    GenerateCode { instructions: String },
    /// Free-form user request.
    Custom { request: String },
}

impl TaskType {
    /// Resolve a wire id. Parameterized variants get empty fields (filled
    /// with defaults at build time); unknown ids degrade to
    /// [`TaskType::ExplainCodeFlow`] rather than failing.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "explain_code_flow" => TaskType::ExplainCodeFlow,
            "generate_snippet" => TaskType::GenerateSnippet {
                functionality: String::new(),
            },
            "debug_code" => TaskType::DebugCode,
            "optimize_performance" => TaskType::OptimizePerformance,
            "summarize_post_list" => TaskType::SummarizePostList,
            "generate_tests" => TaskType::GenerateTests,
            "security_audit" => TaskType::SecurityAudit,
            "translate_code" => TaskType::TranslateCode {
                target_language: String::new(),
            },
            "ci_cd_integration" => TaskType::CicdIntegration {
                platform: String::new(),
            },
            "quality_audit" => TaskType::QualityAudit,
            "refactor_code" => TaskType::RefactorWithRecommendation {
                recommendation: String::new(),
            },
            "generate_title" => TaskType::GenerateTitle,
            "generate_full_code" => TaskType::GenerateCode {
                instructions: String::new(),
            },
            "custom_analysis" => TaskType::Custom {
                request: String::new(),
            },
            _ => TaskType::ExplainCodeFlow,
        }
    }

    /// Stable identifier used on the wire and in the CLI.
    pub fn wire_id(&self) -> &'static str {
        match self {
            TaskType::ExplainCodeFlow => "explain_code_flow",
            TaskType::GenerateSnippet { .. } => "generate_snippet",
            TaskType::DebugCode => "debug_code",
            TaskType::OptimizePerformance => "optimize_performance",
            TaskType::SummarizePostList => "summarize_post_list",
            TaskType::GenerateTests => "generate_tests",
            TaskType::SecurityAudit => "security_audit",
            TaskType::TranslateCode { .. } => "translate_code",
            TaskType::CicdIntegration { .. } => "ci_cd_integration",
            TaskType::QualityAudit => "quality_audit",
            TaskType::RefactorWithRecommendation { .. } => "refactor_code",
            TaskType::GenerateTitle => "generate_title",
            TaskType::GenerateCode { .. } => "generate_full_code",
            TaskType::Custom { .. } => "custom_analysis",
        }
    }

    /// Fill this task's parameter field, if it has one. Used by callers
    /// that receive the task id and its parameter separately (CLI flags,
    /// wire requests).
    pub fn with_param(self, value: &str) -> Self {
        let value = value.to_string();
        match self {
            TaskType::GenerateSnippet { .. } => TaskType::GenerateSnippet {
                functionality: value,
            },
            TaskType::TranslateCode { .. } => TaskType::TranslateCode {
                target_language: value,
            },
            TaskType::CicdIntegration { .. } => TaskType::CicdIntegration { platform: value },
            TaskType::RefactorWithRecommendation { .. } => TaskType::RefactorWithRecommendation {
                recommendation: value,
            },
            TaskType::GenerateCode { .. } => TaskType::GenerateCode {
                instructions: value,
            },
            TaskType::Custom { .. } => TaskType::Custom { request: value },
            other => other,
        }
    }

    /// Whether the task expects bare code/text back instead of narrated
    /// markdown.
    pub fn is_raw_output(&self) -> bool {
        matches!(
            self,
            TaskType::RefactorWithRecommendation { .. }
                | TaskType::GenerateTitle
                | TaskType::GenerateCode { .. }
        )
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_id())
    }
}

impl FromStr for TaskType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TaskType::from_wire(s))
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// Build the full instruction string for one LLM call.
///
/// `language` is the poster's declared language hint; empty or unknown
/// hints are rendered as `text`. Raw-output tasks return a minimal,
/// output-constrained prompt with the content embedded; every other task
/// gets preamble + content block + task instruction.
pub fn build_prompt(content: &str, language: &str, task: &TaskType) -> String {
    let language = or_default(language, "text");

    // Raw-output tasks: the caller consumes the response verbatim, so no
    // markdown contract and no analysis footer.
    match task {
        TaskType::RefactorWithRecommendation { recommendation } => {
            let recommendation = or_default(recommendation, "improve readability and structure");
            return format!(
                "Refactor the following {language} code, applying this recommendation: \
                 {recommendation}\n\nReturn ONLY the refactored code, no prose, no markdown \
                 fences.\n\n{content}\n"
            );
        }
        TaskType::GenerateTitle => {
            return format!(
                "Suggest a short, descriptive title (at most 10 words) for a forum post \
                 containing the following {language} code. Return ONLY the title text, \
                 nothing else.\n\n{content}\n"
            );
        }
        TaskType::GenerateCode { instructions } => {
            let instructions = or_default(instructions, content);
            return format!(
                "Write {language} code for the following request: {instructions}\n\n\
                 Return ONLY the code, no prose, no markdown fences.\n"
            );
        }
        _ => {}
    }

    let mut prompt = String::new();
    prompt.push_str(SYSTEM_PREAMBLE);
    prompt.push('\n');

    prompt.push_str(&format!(
        "**Content to analyze ({language}):**\n```text\n{content}\n```\n\n"
    ));

    match task {
        TaskType::ExplainCodeFlow => {
            prompt.push_str(
                "## \u{1f4a1} Code Idea & Flow\n\
                 Explain the overall idea and the execution flow of the code above.\n\
                 - **Main purpose:** state what the code is for.\n\
                 - **Key components:** list and briefly describe the important \
                 functions or modules.\n\
                 - **Data/logic flow:** walk through how data is processed step by step.\n",
            );
        }
        TaskType::GenerateSnippet { functionality } => {
            let functionality = or_default(functionality, "a common CRUD operation");
            prompt.push_str(&format!(
                "## \u{1f4dd} Sample Snippet\n\
                 Create a sample code snippet for `{functionality}` in {language}.\n\
                 - Provide the complete code in a single fenced block.\n\
                 - Include brief explanatory comments in the code.\n\
                 - Make sure the code works and follows basic best practices.\n"
            ));
        }
        TaskType::DebugCode => {
            prompt.push_str(
                "## \u{1f6e0}\u{fe0f} Debug & Proposed Fix\n\
                 Inspect the code above for bugs.\n\
                 - **Cause:** describe each bug found.\n\
                 - **Fix:** provide the corrected code in a fenced block.\n\
                 - **Debug steps:** suggest step-by-step debugging if useful.\n",
            );
        }
        TaskType::OptimizePerformance => {
            prompt.push_str(
                "## \u{26a1} Performance Optimization\n\
                 Propose improvements to the performance of the code above.\n\
                 - **Current state:** comment on the current performance.\n\
                 - **Improvements:** provide the optimized code in a fenced block.\n\
                 - **Explanation:** state each change and why it helps.\n",
            );
        }
        TaskType::SummarizePostList => {
            prompt.push_str(
                "## \u{1f4ca} Post List Overview\n\
                 The content above is a list of posts (titles and bodies). Produce an \
                 aggregate analysis.\n\
                 - **Posts analyzed:** state the total count.\n\
                 - **Main topics:** identify the 2-3 most discussed themes.\n\
                 - **Languages & technologies:** list the most mentioned ones.\n\
                 - **Content mix:** estimate percentages per content type \
                 (questions, code sharing, discussion, guides).\n\
                 - **Summary:** a short paragraph on the overall trend.\n",
            );
        }
        TaskType::GenerateTests => {
            prompt.push_str(
                "## \u{2705} Test Generation\n\
                 Write tests for the code above.\n\
                 - Cover the main behavior and the edge cases.\n\
                 - Use the conventional test framework for the language.\n\
                 - Provide the tests in a fenced block with brief notes on coverage.\n",
            );
        }
        TaskType::SecurityAudit => {
            prompt.push_str(
                "## \u{1f512} Security Review\n\
                 Audit the code above for security issues.\n\
                 - **Findings:** list vulnerabilities (OWASP categories where \
                 applicable) with severity.\n\
                 - **Fixes:** provide corrected code in fenced blocks.\n\
                 - **Practices:** note relevant secure-coding practices.\n",
            );
        }
        TaskType::TranslateCode { target_language } => {
            let target = or_default(target_language, "python");
            prompt.push_str(&format!(
                "## \u{1f310} Language Translation\n\
                 Translate the code above from {language} to {target}.\n\
                 - Provide the translated code in a fenced block tagged `{target}`.\n\
                 - Note any idioms that do not carry over directly.\n"
            ));
        }
        TaskType::CicdIntegration { platform } => {
            let platform = or_default(platform, "GitHub Actions");
            prompt.push_str(&format!(
                "## \u{1f500} CI/CD Pipeline\n\
                 Suggest a CI/CD pipeline configuration for this project on \
                 {platform}.\n\
                 - Provide the pipeline configuration in a fenced block.\n\
                 - Explain each stage briefly.\n"
            ));
        }
        TaskType::QualityAudit => {
            prompt.push_str(
                "## \u{1f9ea} Code Quality Audit\n\
                 The content above contains one or more code submissions. Assess \
                 their quality.\n\
                 - **Per submission:** correctness, readability, and style issues.\n\
                 - **Recurring problems:** patterns seen across submissions.\n\
                 - **Recommendations:** concrete, prioritized improvements.\n",
            );
        }
        TaskType::Custom { request } => {
            let request = or_default(request, "Analyze this code");
            prompt.push_str(&format!(
                "## \u{2753} Custom Request\n\
                 Answer the following user request directly and concisely: \
                 \"{request}\"\n"
            ));
        }
        // Raw-output tasks returned above.
        TaskType::RefactorWithRecommendation { .. }
        | TaskType::GenerateTitle
        | TaskType::GenerateCode { .. } => unreachable!(),
    }

    prompt
}
