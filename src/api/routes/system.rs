//! System handlers: health, OpenAPI, root redirect.

use crate::api::AppState;
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde_json::json;

/// GET / - Redirect to the interactive API documentation
pub async fn root_redirect() -> Redirect {
    Redirect::to("/swagger-ui")
}

/// GET /health - Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is healthy; reports whether the scale driver is present")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "driver_available": state.uploader.driver().is_available(),
    }))
}

/// GET /openapi.json - OpenAPI specification
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "system",
    responses(
        (status = 200, description = "OpenAPI 3.1 specification in JSON format")
    )
)]
pub async fn openapi_spec() -> impl IntoResponse {
    use crate::api::openapi::ApiDoc;
    use utoipa::OpenApi;

    Json(ApiDoc::openapi())
}
