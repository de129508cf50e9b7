pub mod config;
pub mod error;
pub mod form;
pub mod ingredients;
pub mod llm;
pub mod prompts;
pub mod query;
pub mod recipe;

pub use config::{ConfigError, LlmConfig};
pub use error::IngredientError;
pub use form::{Notice, Notifier, RecipeForm, SubmitOutcome, ViewState};
pub use ingredients::IngredientList;
pub use llm::{create_provider_from_env, LlmError, LlmProvider};
pub use query::{LocalRecipeQuery, QueryError, QueryFailure, QueryResponse, RecipeQuery};
pub use recipe::{ask_recipe, AskRecipeRequest, RecipeResponse};
