pub mod anthropic;

pub use anthropic::AnthropicProvider;

use crate::error::ProviderError;
use serde::{Deserialize, Serialize};

/// Normalized LLM provider trait. The review pipeline only needs
/// single-turn completions: one system prompt, one user message, text back.
pub trait LlmProvider: Send + Sync {
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, ProviderError>;
    fn check_auth(&self) -> Result<AuthStatus, ProviderError>;
    fn name(&self) -> &str;
    fn model(&self) -> &str;
}

#[derive(Debug, Clone)]
pub enum AuthStatus {
    Valid,
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Discover the best available provider.
///
/// Priority:
/// 1. User-level config (~/.devally.toml)
/// 2. Environment variable detection (ANTHROPIC_API_KEY)
/// 3. Error: no provider configured
pub fn discover_provider() -> Result<Box<dyn LlmProvider>, ProviderError> {
    use crate::config::{ProviderType, UserConfig};

    if let Ok(Some(config)) = UserConfig::load() {
        match config.provider.provider_type {
            ProviderType::Anthropic => {
                let key_env = config
                    .provider
                    .api_key_env
                    .unwrap_or_else(|| "ANTHROPIC_API_KEY".to_string());
                if let Ok(api_key) = std::env::var(&key_env) {
                    if !api_key.is_empty() {
                        return Ok(Box::new(AnthropicProvider::new(
                            api_key,
                            config.provider.model,
                        )));
                    }
                }
                // Config says anthropic but key not found; fall through to env check
            }
            ProviderType::None => {
                // Explicitly configured as none; fall through to env check
            }
        }
    }

    if let Ok(api_key) = std::env::var("ANTHROPIC_API_KEY") {
        if !api_key.is_empty() {
            return Ok(Box::new(AnthropicProvider::new(api_key, None)));
        }
    }

    crate::error::provider_error::NoCredentialsSnafu.fail()
}
