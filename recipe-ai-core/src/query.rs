//! The remote recipe query as seen by the form.
//!
//! A query yields an envelope with an optional payload and optional structured
//! errors, or fails outright (`QueryFailure`) when no envelope could be produced.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::ingredients::IngredientList;
use crate::llm::LlmProvider;
use crate::recipe::{ask_recipe, RecipeResponse};

/// A structured error reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryError {
    pub message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result envelope of a recipe query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: Option<RecipeResponse>,
    #[serde(default)]
    pub errors: Option<Vec<QueryError>>,
}

impl QueryResponse {
    pub fn data(data: RecipeResponse) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    pub fn errors(errors: Vec<QueryError>) -> Self {
        Self {
            data: None,
            errors: Some(errors),
        }
    }
}

/// The query could not be completed at all.
#[derive(Error, Debug)]
pub enum QueryFailure {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),
}

/// Issues the recipe query for a parsed ingredient list.
#[async_trait]
pub trait RecipeQuery: Send + Sync {
    async fn ask(&self, ingredients: &IngredientList) -> Result<QueryResponse, QueryFailure>;
}

/// Runs the backend function in-process.
///
/// Provider errors are reported as structured errors, the same way a remote
/// backend reports them.
#[derive(Debug, Clone)]
pub struct LocalRecipeQuery {
    provider: Arc<dyn LlmProvider>,
}

impl LocalRecipeQuery {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl RecipeQuery for LocalRecipeQuery {
    async fn ask(&self, ingredients: &IngredientList) -> Result<QueryResponse, QueryFailure> {
        match ask_recipe(self.provider.as_ref(), ingredients).await {
            Ok(data) => Ok(QueryResponse::data(data)),
            Err(e) => Ok(QueryResponse::errors(vec![QueryError::new(e.to_string())])),
        }
    }
}
