//! Scale file handlers: generation and upload.

use crate::api::AppState;
use crate::error::Error;
use crate::generator::generate_for_transport;
use crate::types::{GenerationResult, ProductTagLink, UploadRequest, UploadResult};
use axum::{Json, extract::State};

/// POST /generate-scale-configs - Generate the scale files for a product list
#[utoipa::path(
    post,
    path = "/generate-scale-configs",
    tag = "scale",
    request_body = Vec<ProductTagLink>,
    responses(
        (status = 200, description = "Generated AAH, CCH and 25H files, Base64 encoded", body = GenerationResult),
        (status = 500, description = "A product could not be encoded", body = crate::error::ApiError)
    )
)]
pub async fn generate_scale_configs(
    Json(products): Json<Vec<ProductTagLink>>,
) -> Result<Json<GenerationResult>, Error> {
    tracing::info!(products = products.len(), "generate request received");

    generate_for_transport(&products).map(Json).map_err(|e| {
        tracing::error!(error = %e, "file generation failed");
        e
    })
}

/// POST /upload-to-scale - Generate the scale files and transmit them
///
/// Upload failures (invalid address, missing driver, driver exit code) are
/// reported with status 200 and `success: false`; only generation errors and
/// unexpected faults produce an error status.
#[utoipa::path(
    post,
    path = "/upload-to-scale",
    tag = "scale",
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Upload attempt finished; see `success` and `log`", body = UploadResult),
        (status = 500, description = "A product could not be encoded", body = crate::error::ApiError)
    )
)]
pub async fn upload_to_scale(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> Result<Json<UploadResult>, Error> {
    tracing::info!(
        products = request.products.len(),
        address = %request.scale_ip_address,
        "upload request received"
    );

    state
        .uploader
        .upload_products(&request.scale_ip_address, &request.products)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, "upload request failed");
            e
        })
}
