use std::path::PathBuf;

use snafu::ResultExt;

use crate::config::{self, UserConfig};
use crate::error::devally_error::ProviderSnafu;
use crate::error::Result;
use crate::format;
use crate::prompt::{build_prompt, TaskType};
use crate::provider::{self, CompletionRequest};

pub fn run(task: String, language: String, param: String, file: Option<PathBuf>) -> Result<()> {
    let content = super::read_input(file.as_deref())?;
    let task = TaskType::from_wire(&task).with_param(&param);
    let prompt = build_prompt(&content, &language, &task);

    let provider = provider::discover_provider().context(ProviderSnafu)?;
    tracing::debug!(
        provider = provider.name(),
        model = provider.model(),
        task = %task,
        "requesting review"
    );

    let max_tokens = UserConfig::load()
        .ok()
        .flatten()
        .map(|c| c.review.max_tokens)
        .unwrap_or(config::DEFAULT_MAX_TOKENS);

    let request = CompletionRequest {
        system: String::new(),
        prompt,
        max_tokens,
    };
    let response = provider.complete(&request).context(ProviderSnafu)?;
    tracing::debug!(
        input_tokens = response.usage.input_tokens,
        output_tokens = response.usage.output_tokens,
        "review complete"
    );

    // Raw-output tasks are consumed verbatim; everything else is rendered
    // into the styled comment body.
    if task.is_raw_output() {
        println!("{}", response.text.trim());
    } else {
        println!("{}", format::format_full_response(&response.text, None));
    }
    Ok(())
}
