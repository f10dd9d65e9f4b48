//! HTTP error response handling for the API

use crate::error::{ApiError, Error, ToHttpStatus};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors become `{"error": {...}}` bodies with the mapped status code
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let api_error: ApiError = self.into();

        (status_code, Json(api_error)).into_response()
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn body_of(response: Response) -> ApiError {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn invalid_tag_id_is_a_server_fault() {
        let response = Error::InvalidTagId {
            tag_id: "12x".into(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let api_error = body_of(response).await;
        assert_eq!(api_error.error.code, "invalid_tag_id");
        assert_eq!(api_error.error.status, 500);
        assert_eq!(api_error.error.details.unwrap()["tag_id"], "12x");
    }

    #[tokio::test]
    async fn driver_timeout_is_gateway_timeout() {
        let response = Error::DriverTimeout {
            command: "WR 170 10.0.0.5".into(),
            timeout: Duration::from_secs(30),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body_of(response).await.error.code, "driver_timeout");
    }
}
