//! HTTP client for the recipe server.

use async_trait::async_trait;
use recipe_ai_core::{
    AskRecipeRequest, IngredientList, QueryError, QueryFailure, QueryResponse, RecipeQuery,
    RecipeResponse,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
struct PingResponse {
    message: String,
}

/// Issues the recipe query against a running `recipe-ai-server`.
#[derive(Debug, Clone)]
pub struct HttpRecipeQuery {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecipeQuery {
    pub fn new(server: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: server.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Call the unauthenticated ping endpoint and return its message.
    pub async fn ping(&self) -> anyhow::Result<String> {
        let response: PingResponse = self
            .client
            .get(self.url("/api/test/unauthed-ping"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.message)
    }
}

#[async_trait]
impl RecipeQuery for HttpRecipeQuery {
    async fn ask(&self, ingredients: &IngredientList) -> Result<QueryResponse, QueryFailure> {
        let request = AskRecipeRequest {
            ingredients: ingredients.as_slice().to_vec(),
        };

        let response = self
            .client
            .post(self.url("/api/recipes/ask"))
            .json(&request)
            .send()
            .await
            .map_err(|e| QueryFailure::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QueryFailure::Transport(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), "Recipe query answered");

        if status.is_success() {
            let data: RecipeResponse =
                serde_json::from_str(&body).map_err(|e| QueryFailure::Decode(e.to_string()))?;
            return Ok(QueryResponse::data(data));
        }

        // Structured errors come back as an ErrorResponse body
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => Ok(QueryResponse::errors(vec![QueryError::new(error.error)])),
            Err(_) => Err(QueryFailure::UnexpectedStatus(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn ingredients() -> IngredientList {
        IngredientList::parse("Chicken, Rice").unwrap()
    }

    #[tokio::test]
    async fn test_success_is_data() {
        let router = Router::new().route(
            "/api/recipes/ask",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"ingredients": ["Chicken", "Rice"]}));
                Json(json!({"body": "Chicken and rice"}))
            }),
        );
        let query = HttpRecipeQuery::new(&spawn_stub(router).await);

        let response = query.ask(&ingredients()).await.unwrap();
        assert_eq!(
            response,
            QueryResponse::data(RecipeResponse::with_body("Chicken and rice"))
        );
    }

    #[tokio::test]
    async fn test_error_body_is_structured_error() {
        let router = Router::new().route(
            "/api/recipes/ask",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"error": "AI service error: overloaded"})),
                )
            }),
        );
        let query = HttpRecipeQuery::new(&spawn_stub(router).await);

        let response = query.ask(&ingredients()).await.unwrap();
        assert!(response.data.is_none());
        assert_eq!(
            response.errors,
            Some(vec![QueryError::new("AI service error: overloaded")])
        );
    }

    #[tokio::test]
    async fn test_unstructured_error_is_failure() {
        let router = Router::new().route(
            "/api/recipes/ask",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream gone") }),
        );
        let query = HttpRecipeQuery::new(&spawn_stub(router).await);

        let err = query.ask(&ingredients()).await.unwrap_err();
        assert!(matches!(err, QueryFailure::UnexpectedStatus(502)));
    }

    #[tokio::test]
    async fn test_garbled_success_is_decode_failure() {
        let router = Router::new().route("/api/recipes/ask", post(|| async { "not json" }));
        let query = HttpRecipeQuery::new(&spawn_stub(router).await);

        let err = query.ask(&ingredients()).await.unwrap_err();
        assert!(matches!(err, QueryFailure::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let query = HttpRecipeQuery::new(&format!("http://{}", addr));
        let err = query.ask(&ingredients()).await.unwrap_err();
        assert!(matches!(err, QueryFailure::Transport(_)));
    }

    #[tokio::test]
    async fn test_ping() {
        let router = Router::new().route(
            "/api/test/unauthed-ping",
            get(|| async { Json(json!({"message": "unauthed-ping"})) }),
        );
        let query = HttpRecipeQuery::new(&format!("{}/", spawn_stub(router).await));

        assert_eq!(query.ping().await.unwrap(), "unauthed-ping");
    }
}
