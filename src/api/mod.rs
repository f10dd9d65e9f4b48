//! REST API server module
//!
//! Thin HTTP boundary over the generator and the uploader. Request bodies are
//! parsed here; the library functions receive plain values.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::uploader::ScaleUploader;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Scale files
/// - `POST /generate-scale-configs` - Generate the AAH, CCH and 25H files (Base64)
/// - `POST /upload-to-scale` - Generate the files and transmit them to a scale
///
/// ## System
/// - `GET /` - Redirect to the Swagger UI
/// - `GET /health` - Health check
/// - `GET /openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive Swagger UI documentation (if enabled)
pub fn create_router(uploader: Arc<ScaleUploader>, config: Arc<Config>) -> Router {
    let state = AppState::new(uploader);

    let router = Router::new()
        .route("/", get(routes::root_redirect))
        .route("/generate-scale-configs", post(routes::generate_scale_configs))
        .route("/upload-to-scale", post(routes::upload_to_scale))
        .route("/health", get(routes::health_check))
        .route("/openapi.json", get(routes::openapi_spec));

    // SwaggerUi serves its own copy of the document; keep it off /openapi.json
    let router = if config.server.api.swagger_ui {
        router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
    } else {
        router
    };

    let router = router
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.server.api.cors_enabled {
        router.layer(build_cors_layer(&config.server.api.cors_origins))
    } else {
        router
    }
}

/// Build a CORS layer based on configured origins
///
/// `"*"` or an empty list allows any origin.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_any = origins.iter().any(|o| o == "*");

    if allow_any || origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server on the configured bind address.
///
/// Runs until SIGINT/SIGTERM (Ctrl+C on Windows), then lets in-flight
/// requests finish. An upload that is still running completes its cleanup
/// before the server returns.
///
/// # Example
///
/// ```no_run
/// use scale_config::{Config, ScaleUploader};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Arc::new(Config::default());
/// let uploader = Arc::new(ScaleUploader::from_config(&config.driver)?);
///
/// scale_config::api::start_api_server(uploader, config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_api_server(uploader: Arc<ScaleUploader>, config: Arc<Config>) -> Result<()> {
    let bind_address = config.server.api.bind_address;

    tracing::info!(
        address = %bind_address,
        driver = ?uploader.driver().executable(),
        "Starting API server"
    );

    let app = create_router(uploader, config);

    let listener = TcpListener::bind(bind_address).await.map_err(Error::Io)?;

    tracing::info!(address = %bind_address, "API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(crate::shutdown_signal())
        .await
        .map_err(|e| Error::ApiServerError(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
