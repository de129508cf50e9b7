pub mod ask;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use recipe_ai_core::{AskRecipeRequest, RecipeResponse};
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new().route("/ask", post(ask::ask_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(ask::ask_recipe),
    components(schemas(AskRecipeRequest, RecipeResponse))
)]
pub struct ApiDoc;
