mod common;

use axum_test::TestServer;
use link_shortener::routes::build_router;

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "REDIR1", "https://example.com/target").await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server.get("/REDIR1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_lowercase_code() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "REDIR2", "https://example.com/lower").await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server.get("/redir2").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/lower");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::test_pool().await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server.get("/ZZZZZZ").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_unusable_location_returns_error_envelope() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "BADURL", "https://example.com/\nsplit").await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server.get("/BADURL").await;

    assert_eq!(response.status_code(), 500);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["details"]["short_code"], "BADURL");
}
