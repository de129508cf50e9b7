//! The backend function: turn an ingredient list into generated recipe text.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ingredients::IngredientList;
use crate::llm::{LlmError, LlmProvider};
use crate::prompts::{render_recipe_prompt, RECIPE_PROMPT_NAME};

/// Arguments of the recipe query.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AskRecipeRequest {
    pub ingredients: Vec<String>,
}

/// Payload returned by the backend function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    /// Generated recipe text.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RecipeResponse {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            error: None,
        }
    }
}

/// Ask the model for a recipe idea using `ingredients`.
///
/// Makes exactly one provider call.
pub async fn ask_recipe(
    provider: &dyn LlmProvider,
    ingredients: &IngredientList,
) -> Result<RecipeResponse, LlmError> {
    let prompt = render_recipe_prompt(ingredients.as_slice());

    tracing::info!(
        prompt_name = RECIPE_PROMPT_NAME,
        provider = provider.provider_name(),
        model = provider.model_name(),
        ingredient_count = ingredients.len(),
        "Generating recipe"
    );

    let text = provider.complete(&prompt).await?;
    Ok(RecipeResponse::with_body(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;

    #[tokio::test]
    async fn test_ask_recipe_uses_rendered_prompt() {
        let provider = FakeProvider::with_response(
            "using these ingredients: chicken, rice.",
            "Chicken and rice",
        );
        let ingredients = IngredientList::parse("chicken, rice").unwrap();

        let response = ask_recipe(&provider, &ingredients).await.unwrap();
        assert_eq!(response, RecipeResponse::with_body("Chicken and rice"));
    }

    #[tokio::test]
    async fn test_ask_recipe_propagates_provider_error() {
        let provider = FakeProvider::failing("unavailable");
        let ingredients = IngredientList::parse("tofu").unwrap();

        let err = ask_recipe(&provider, &ingredients).await.unwrap_err();
        assert!(matches!(err, LlmError::RequestFailed(_)));
    }

    #[test]
    fn test_response_missing_fields_deserialize() {
        let response: RecipeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, RecipeResponse::default());
    }
}
