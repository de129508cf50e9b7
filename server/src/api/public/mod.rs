pub mod testing;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for public endpoints
pub fn router() -> Router<AppState> {
    Router::new().route(
        testing::unauthed_ping::PATH,
        get(testing::unauthed_ping::handler),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(testing::unauthed_ping::handler),
    components(schemas(testing::unauthed_ping::Response))
)]
pub struct ApiDoc;
