//! Caching wrapper for LLM providers.
//!
//! Wraps any LlmProvider to cache responses on disk. The cache key is based on
//! the provider name, model name, and prompt hash.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

/// Cached LLM response metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    pub provider: String,
    pub model: String,
    pub prompt_hash: String,
    pub cached_at: DateTime<Utc>,
}

/// Cached LLM response with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedLlmResponse {
    metadata: CacheMetadata,
    response: String,
}

/// Cache statistics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub cached_responses: usize,
}

/// A caching wrapper around any LLM provider.
///
/// Same prompt to same model always returns the same cached response.
#[derive(Debug)]
pub struct CachingProvider {
    inner: Box<dyn LlmProvider>,
    cache_dir: PathBuf,
}

impl CachingProvider {
    pub fn new(inner: Box<dyn LlmProvider>, cache_dir: PathBuf) -> Self {
        Self { inner, cache_dir }
    }

    /// SHA-256 of the prompt, truncated to 16 bytes (32 hex chars).
    fn cache_key(&self, prompt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(prompt.as_bytes());
        let result = hasher.finalize();
        hex::encode(&result[..16])
    }

    fn provider_cache_dir(&self) -> PathBuf {
        self.cache_dir
            .join(self.inner.provider_name())
            .join(self.inner.model_name().replace(['/', ':'], "_"))
    }

    fn cache_path(&self, prompt_hash: &str) -> PathBuf {
        self.provider_cache_dir()
            .join(format!("{}.json", prompt_hash))
    }

    fn get_cached(&self, prompt_hash: &str) -> Option<String> {
        let content = fs::read_to_string(self.cache_path(prompt_hash)).ok()?;
        match serde_json::from_str::<CachedLlmResponse>(&content) {
            Ok(cached) => {
                tracing::debug!(
                    provider = self.inner.provider_name(),
                    model = self.inner.model_name(),
                    prompt_hash = prompt_hash,
                    "LLM cache hit"
                );
                Some(cached.response)
            }
            Err(e) => {
                tracing::warn!(prompt_hash = prompt_hash, error = %e, "Ignoring corrupt cache entry");
                None
            }
        }
    }

    fn save_to_cache(&self, prompt_hash: &str, response: &str) -> Result<(), LlmError> {
        let dir = self.provider_cache_dir();
        fs::create_dir_all(&dir).map_err(|e| LlmError::CacheError(e.to_string()))?;

        let cached = CachedLlmResponse {
            metadata: CacheMetadata {
                provider: self.inner.provider_name().to_string(),
                model: self.inner.model_name().to_string(),
                prompt_hash: prompt_hash.to_string(),
                cached_at: Utc::now(),
            },
            response: response.to_string(),
        };

        let content = serde_json::to_string_pretty(&cached)
            .map_err(|e| LlmError::CacheError(e.to_string()))?;

        fs::write(self.cache_path(prompt_hash), content)
            .map_err(|e| LlmError::CacheError(e.to_string()))?;

        tracing::debug!(
            provider = self.inner.provider_name(),
            model = self.inner.model_name(),
            prompt_hash = prompt_hash,
            "LLM response cached"
        );

        Ok(())
    }

    /// Count cached responses for the wrapped provider/model.
    pub fn cache_stats(&self) -> CacheStats {
        let mut stats = CacheStats::default();

        if let Ok(entries) = fs::read_dir(self.provider_cache_dir()) {
            stats.cached_responses = entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
                .count();
        }

        stats
    }
}

#[async_trait]
impl LlmProvider for CachingProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let prompt_hash = self.cache_key(prompt);

        if let Some(cached) = self.get_cached(&prompt_hash) {
            return Ok(cached);
        }

        tracing::debug!(
            provider = self.inner.provider_name(),
            model = self.inner.model_name(),
            prompt_hash = %prompt_hash,
            "LLM cache miss, calling provider"
        );

        let response = self.inner.complete(prompt).await?;

        // Best-effort
        if let Err(e) = self.save_to_cache(&prompt_hash, &response) {
            tracing::warn!(error = %e, "Failed to cache LLM response");
        }

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
