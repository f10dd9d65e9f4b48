//! OpenAPI documentation and schema generation
//!
//! The document is generated at compile time by utoipa from the handler
//! annotations in [`crate::api::routes`].

use utoipa::OpenApi;

/// OpenAPI documentation for the scale-config REST API
///
/// Served at:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "scale-config REST API",
        version = "0.1.0",
        description = "Generates binary configuration files that link products to electronic shelf-label tags and uploads them to a retail scale",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // Scale files
        crate::api::routes::generate_scale_configs,
        crate::api::routes::upload_to_scale,

        // System
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        crate::types::ProductTagLink,
        crate::types::ScaleFile,
        crate::types::GenerationResult,
        crate::types::UploadRequest,
        crate::types::UploadResult,

        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "scale", description = "Scale files - Generate the AAH, CCH and 25H files and upload them to a scale"),
        (name = "system", description = "System endpoints - Health check and OpenAPI spec"),
    )
)]
pub struct ApiDoc;
