use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

#[tokio::test]
async fn test_generate_scale_configs() {
    let (app, _temp_dir) = test_router();

    let response = app
        .oneshot(post_json("/generate-scale-configs", &angus_beef()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let files = body["files"].as_array().unwrap();
    assert_eq!(files.len(), 3);

    let hex: Vec<&str> = files
        .iter()
        .map(|f| f["fileNumberHex"].as_str().unwrap())
        .collect();
    assert_eq!(hex, ["AAH", "CCH", "25H"]);

    let decimal: Vec<u64> = files
        .iter()
        .map(|f| f["fileNumberDecimal"].as_u64().unwrap())
        .collect();
    assert_eq!(decimal, [170, 204, 37]);

    let content = |i: usize| {
        STANDARD
            .decode(files[i]["contentBase64"].as_str().unwrap())
            .unwrap()
    };
    assert_eq!(content(0).len(), 30);
    assert_eq!(content(1).len(), 176);
    assert_eq!(content(2), crate::encoding::TRIGGER_PLACEHOLDER);
}

#[tokio::test]
async fn test_generate_empty_product_list() {
    let (app, _temp_dir) = test_router();

    let response = app
        .oneshot(post_json("/generate-scale-configs", &json!([])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let files = body["files"].as_array().unwrap();
    assert_eq!(files.len(), 3);
    assert_eq!(files[0]["contentBase64"], "");
    assert_eq!(files[1]["contentBase64"], "");
}

#[tokio::test]
async fn test_generate_invalid_tag_id() {
    let (app, _temp_dir) = test_router();

    let body = json!([{
        "pluNumber": 10,
        "tagId": "11111111x",
        "productName": "Angus Beef",
        "imageId": 42
    }]);

    let response = app
        .oneshot(post_json("/generate-scale-configs", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "invalid_tag_id");
    assert_eq!(body["error"]["details"]["tag_id"], "11111111x");
}

#[tokio::test]
async fn test_generate_malformed_body() {
    let (app, _temp_dir) = test_router();

    let request = Request::builder()
        .method("POST")
        .uri("/generate-scale-configs")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_upload_invalid_address() {
    let (app, temp_dir) = test_router();

    let body = json!({
        "scaleIpAddress": "999.1.1.1",
        "products": angus_beef()
    });

    let response = app
        .oneshot(post_json("/upload-to-scale", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Upload failed: Invalid IP address.");
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_upload_driver_missing() {
    let (app, temp_dir) = test_router();

    let body = json!({
        "scaleIpAddress": "192.168.1.50",
        "products": angus_beef()
    });

    let response = app
        .oneshot(post_json("/upload-to-scale", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Upload failed: Driver not found.");
    assert!(
        body["log"][0]
            .as_str()
            .unwrap()
            .contains("TWSWTCP.exe")
    );
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_upload_invalid_tag_id_is_an_error() {
    let (app, _temp_dir) = test_router();

    let body = json!({
        "scaleIpAddress": "192.168.1.50",
        "products": [{
            "pluNumber": 1,
            "tagId": "",
            "productName": "Brisket",
            "imageId": 0
        }]
    });

    let response = app
        .oneshot(post_json("/upload-to-scale", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["error"]["code"], "invalid_tag_id");
}

#[tokio::test]
async fn test_generate_accepts_pascal_case_body() {
    let (app, _temp_dir) = test_router();

    let body = json!([{
        "PluNumber": 10,
        "TagId": "111111111",
        "ProductName": "Angus Beef",
        "ImageId": 42
    }]);

    let response = app
        .oneshot(post_json("/generate-scale-configs", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["files"].as_array().unwrap().len(), 3);
    assert_ne!(body["files"][0]["contentBase64"], "");
}
