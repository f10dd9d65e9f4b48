use super::*;
use crate::Config;
use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};
use tower::ServiceExt;

mod scale;

/// Config whose driver lives in an empty temp dir, so the driver is absent
fn test_config() -> (Config, TempDir) {
    let temp_dir = tempdir().unwrap();
    let mut config = Config::default();
    config.driver.base_dir = Some(temp_dir.path().to_path_buf());
    (config, temp_dir)
}

fn router_for(config: Config) -> Router {
    let uploader = Arc::new(ScaleUploader::from_config(&config.driver).unwrap());
    create_router(uploader, Arc::new(config))
}

/// Router with default API settings and no driver
fn test_router() -> (Router, TempDir) {
    let (config, temp_dir) = test_config();
    (router_for(config), temp_dir)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn angus_beef() -> Value {
    json!([{
        "pluNumber": 10,
        "tagId": "111111111",
        "productName": "Angus Beef",
        "imageId": 42
    }])
}

#[tokio::test]
async fn test_api_server_spawns() {
    let (mut config, _temp_dir) = test_config();
    config.server.api.bind_address = "127.0.0.1:0".parse().unwrap();
    let uploader = Arc::new(ScaleUploader::from_config(&config.driver).unwrap());

    let api_handle = tokio::spawn(start_api_server(uploader, Arc::new(config)));

    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert!(!api_handle.is_finished(), "server should still be running");

    api_handle.abort();
}

#[tokio::test]
async fn test_cors_enabled() {
    let (app, _temp_dir) = test_router();

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin"),
        "CORS header should be present when CORS is enabled"
    );
}

#[tokio::test]
async fn test_cors_disabled() {
    let (mut config, _temp_dir) = test_config();
    config.server.api.cors_enabled = false;
    let app = router_for(config);

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        !response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let (mut config, _temp_dir) = test_config();
    config.server.api.cors_origins = vec!["http://pos.local".to_string()];
    let app = router_for(config);

    let allowed = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("Origin", "http://pos.local")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()["access-control-allow-origin"],
        "http://pos.local"
    );

    let other = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("Origin", "http://elsewhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(
        !other
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
