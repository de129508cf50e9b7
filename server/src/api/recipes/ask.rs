use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use recipe_ai_core::{AskRecipeRequest, IngredientList, RecipeResponse};

/// Generate a recipe from a list of ingredients
///
/// Forwards the ingredients to the configured language model and returns the
/// generated recipe text in `body`. Stateless; nothing is stored.
#[utoipa::path(
    post,
    path = "/api/recipes/ask",
    tag = "recipes",
    request_body = AskRecipeRequest,
    responses(
        (status = 200, description = "Generated recipe", body = RecipeResponse),
        (status = 400, description = "No ingredients given", body = ErrorResponse),
        (status = 503, description = "AI service unavailable", body = ErrorResponse)
    )
)]
pub async fn ask_recipe(
    State(provider): State<AppState>,
    Json(request): Json<AskRecipeRequest>,
) -> impl IntoResponse {
    if request.ingredients.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "At least one ingredient is required".to_string(),
            }),
        )
            .into_response();
    }

    let ingredients = IngredientList::from_items(request.ingredients);

    match recipe_ai_core::ask_recipe(provider.as_ref(), &ingredients).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "AI call failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: format!("AI service error: {}", e),
                }),
            )
                .into_response()
        }
    }
}
