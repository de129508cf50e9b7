//! LLM configuration from environment variables.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::prompts::DEFAULT_MAX_TOKENS;

/// Default Anthropic API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

/// Which backend answers recipe prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Claude,
    Fake,
}

/// LLM client configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: ProviderKind,
    /// API key; only required for Claude.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    /// Directory for caching responses. `None` disables caching.
    pub cache_dir: Option<PathBuf>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Fake,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            cache_dir: None,
        }
    }
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// - `RECIPE_AI_PROVIDER`: "claude" | "fake" (default: "fake")
    /// - `ANTHROPIC_API_KEY`: required when the provider is "claude"
    /// - `RECIPE_AI_MODEL`: model name (default: "claude-3-5-sonnet-20241022")
    /// - `RECIPE_AI_BASE_URL`: API base URL (default: "https://api.anthropic.com")
    /// - `RECIPE_AI_MAX_TOKENS`: response budget (default: 1000)
    /// - `RECIPE_AI_CACHE_DIR`: cache directory; caching is off when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("RECIPE_AI_PROVIDER").as_deref() {
            None | Some("fake") => ProviderKind::Fake,
            Some("claude") => ProviderKind::Claude,
            Some(other) => return Err(ConfigError::UnknownProvider(other.to_string())),
        };

        let api_key = lookup("ANTHROPIC_API_KEY");
        if provider == ProviderKind::Claude && api_key.is_none() {
            return Err(ConfigError::MissingEnvVar("ANTHROPIC_API_KEY".to_string()));
        }

        let model = lookup("RECIPE_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url =
            lookup("RECIPE_AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let max_tokens = lookup("RECIPE_AI_MAX_TOKENS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let cache_dir = lookup("RECIPE_AI_CACHE_DIR").map(PathBuf::from);

        Ok(Self {
            provider,
            api_key,
            model,
            base_url,
            max_tokens,
            cache_dir,
        })
    }

    /// Get the default cache directory: ~/.recipe-ai/llm-cache
    pub fn default_cache_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".recipe-ai").join("llm-cache"))
            .unwrap_or_else(|| PathBuf::from(".cache/llm"))
    }
}
