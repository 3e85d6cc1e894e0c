use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::error::config_error::{
    NoHomeDirectorySnafu, ParseConfigSnafu, ReadFileSnafu, SerializeConfigSnafu, WriteFileSnafu,
};
use crate::error::ConfigError;

/// Default token budget for one review completion.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// User-level config stored at ~/.devally.toml.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserConfig {
    pub provider: ProviderConfig,
    #[serde(default)]
    pub review: ReviewConfig,
}

/// Provider configuration within user config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderConfig {
    #[serde(rename = "type")]
    pub provider_type: ProviderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

/// Supported provider types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderType {
    Anthropic,
    None,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::Anthropic => write!(f, "anthropic"),
            ProviderType::None => write!(f, "none"),
        }
    }
}

/// Review call settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewConfig {
    pub max_tokens: u32,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl UserConfig {
    /// Path to the user config file (~/.devally.toml).
    pub fn path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME")
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .ok_or_else(|| NoHomeDirectorySnafu.build())?;
        Ok(home.join(".devally.toml"))
    }

    /// Load user config from ~/.devally.toml.
    /// Returns Ok(None) if the file does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path).context(ReadFileSnafu {
            path: path.display().to_string(),
        })?;
        let config: UserConfig = toml::from_str(&contents).context(ParseConfigSnafu)?;
        Ok(Some(config))
    }

    /// Save user config to ~/.devally.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let contents = toml::to_string_pretty(self).context(SerializeConfigSnafu)?;
        std::fs::write(&path, contents).context(WriteFileSnafu {
            path: path.display().to_string(),
        })?;
        Ok(())
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                provider_type: ProviderType::None,
                model: None,
                api_key_env: None,
            },
            review: ReviewConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_serialization() {
        let config = UserConfig {
            provider: ProviderConfig {
                provider_type: ProviderType::Anthropic,
                model: Some("claude-sonnet-4-5-20250929".to_string()),
                api_key_env: Some("ANTHROPIC_API_KEY".to_string()),
            },
            review: ReviewConfig::default(),
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("\"anthropic\""));
        assert!(toml_str.contains("claude-sonnet-4-5-20250929"));
    }

    #[test]
    fn test_roundtrip() {
        let config = UserConfig {
            provider: ProviderConfig {
                provider_type: ProviderType::Anthropic,
                model: None,
                api_key_env: None,
            },
            review: ReviewConfig { max_tokens: 2048 },
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: UserConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_review_section_optional() {
        let parsed: UserConfig = toml::from_str("[provider]\ntype = \"none\"\n").unwrap();
        assert_eq!(parsed.review.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_provider_type_display() {
        assert_eq!(ProviderType::Anthropic.to_string(), "anthropic");
        assert_eq!(ProviderType::None.to_string(), "none");
    }
}
