//! Recipe prompt template.

/// Prompt name for cache keys and logs.
pub const RECIPE_PROMPT_NAME: &str = "ask_recipe";

/// Token budget for a generated recipe.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Render the prompt asking the model for a recipe idea.
pub fn render_recipe_prompt(ingredients: &[String]) -> String {
    format!(
        "Suggest a recipe idea using these ingredients: {}.",
        ingredients.join(", ")
    )
}
