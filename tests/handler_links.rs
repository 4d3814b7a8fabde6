mod common;

use axum_test::TestServer;
use link_shortener::infrastructure::imaging::QrRenderer;
use link_shortener::prelude::ImageRenderer;
use link_shortener::routes::build_router;
use serde_json::json;

#[tokio::test]
async fn test_list_empty() {
    let pool = common::test_pool().await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server.get("/list").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_list_returns_all_links() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "LIST01", "https://one.example").await;
    common::create_test_link(&pool, "LIST02", "https://two.example").await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server.get("/list").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.contains(&json!({
        "short_code": "LIST01",
        "long_url": "https://one.example"
    })));
    assert!(items.contains(&json!({
        "short_code": "LIST02",
        "long_url": "https://two.example"
    })));
}

#[tokio::test]
async fn test_resolve_success() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "RES001", "https://example.com/resolved").await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server
        .get("/resolve")
        .add_query_param("short_code", "res001")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["short_code"], "RES001");
    assert_eq!(json["long_url"], "https://example.com/resolved");
}

#[tokio::test]
async fn test_resolve_missing_parameter() {
    let pool = common::test_pool().await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server.get("/resolve").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_resolve_unknown_code() {
    let pool = common::test_pool().await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server
        .get("/resolve")
        .add_query_param("short_code", "ZZZZZZ")
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_qrcode_matches_rendered_payload() {
    let pool = common::test_pool().await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let created = server
        .post("/shorten")
        .json(&json!({ "long_url": "https://example.com/qr" }))
        .await
        .json::<serde_json::Value>();
    let code = created["short_code"].as_str().unwrap();

    let response = server.get(&format!("/qrcode/{code}")).await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/octet-stream");

    let expected = QrRenderer::default()
        .render("https://example.com/qr")
        .unwrap();
    assert_eq!(response.as_bytes().to_vec(), expected);
}

#[tokio::test]
async fn test_qrcode_unknown_code() {
    let pool = common::test_pool().await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server.get("/qrcode/ZZZZZZ").await;

    response.assert_status_not_found();
}
