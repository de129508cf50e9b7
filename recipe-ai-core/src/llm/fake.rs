//! Fake LLM provider for testing.
//!
//! This provider returns deterministic responses based on prompt matching,
//! allowing tests and local runs to work without network access or API costs.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered substring.
/// Patterns are checked in registration order. If no match is found, returns the
/// default response or an error.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// (prompt substring, response) pairs
    responses: Vec<(String, String)>,
    /// Default response if no match found
    default_response: Option<String>,
    /// When set, every call fails with this message
    failure: Option<String>,
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Create a FakeProvider whose every call fails.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Canned recipes used when no real provider is configured.
    pub fn with_recipe_responses() -> Self {
        let mut provider = Self::new();

        provider.add_response(
            "chicken",
            "Chicken Burrito Bowl\n\nIngredients:\n- 2 chicken breasts\n- 1 cup rice\n- 1 can black beans\n\nInstructions:\n1. Cook the rice.\n2. Season and grill the chicken, then slice.\n3. Warm the beans and serve everything over rice.",
        );

        provider.add_response(
            "egg",
            "Simple Frittata\n\nIngredients:\n- 6 eggs\n- 1/2 cup milk\n- salt and pepper\n\nInstructions:\n1. Whisk eggs with milk and season.\n2. Pour into an oven-safe pan and cook until the edges set.\n3. Finish under the broiler until golden.",
        );

        provider.with_default_response(
            "Pantry Stir Fry\n\nInstructions:\n1. Chop everything into bite-sized pieces.\n2. Stir fry over high heat with oil and garlic.\n3. Season with soy sauce and serve hot.",
        )
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if let Some(message) = &self.failure {
            return Err(LlmError::RequestFailed(message.clone()));
        }

        // Case-insensitive
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in &self.responses {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
