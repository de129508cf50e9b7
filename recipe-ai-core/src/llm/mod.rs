//! LLM provider abstraction for recipe generation.
//!
//! The backend function talks to a hosted model through `LlmProvider`. Claude
//! is the real provider; `FakeProvider` answers deterministically for tests
//! and offline runs, and `CachingProvider` wraps either one with a disk cache.

mod caching;
mod claude;
mod fake;

pub use caching::{CacheStats, CachingProvider};
pub use claude::ClaudeProvider;
pub use fake::FakeProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::config::{LlmConfig, ProviderKind};

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. The provider is responsible
/// for making API calls and returning the model's text response.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the LLM and get a text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "claude", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}

/// Build the provider described by `config`.
///
/// The provider is wrapped in a `CachingProvider` when `config.cache_dir` is set.
pub fn create_provider(config: &LlmConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    let inner: Box<dyn LlmProvider> = match config.provider {
        ProviderKind::Fake => Box::new(FakeProvider::with_recipe_responses()),
        ProviderKind::Claude => {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| LlmError::NotConfigured("ANTHROPIC_API_KEY not set".to_string()))?;
            Box::new(
                ClaudeProvider::new(api_key, config.model.clone())
                    .with_base_url(&config.base_url)
                    .with_max_tokens(config.max_tokens),
            )
        }
    };

    tracing::info!(
        provider = inner.provider_name(),
        model = inner.model_name(),
        caching = config.cache_dir.is_some(),
        "LLM provider configured"
    );

    match &config.cache_dir {
        Some(dir) => Ok(Box::new(CachingProvider::new(inner, dir.clone()))),
        None => Ok(inner),
    }
}

/// Read `LlmConfig` from the environment and build the provider.
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let config = LlmConfig::from_env().map_err(|e| LlmError::NotConfigured(e.to_string()))?;
    create_provider(&config)
}
