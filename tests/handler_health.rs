mod common;

use axum_test::TestServer;
use link_shortener::routes::build_router;

#[tokio::test]
async fn test_health_ok() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "HLTH01", "https://example.com").await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["links"], 1);
    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, 1 links stored"
    );
}

#[tokio::test]
async fn test_health_degraded_when_database_closed() {
    let pool = common::test_pool().await;
    let server = TestServer::new(build_router(common::create_test_state(&pool))).unwrap();

    pool.close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert!(json["checks"]["database"].get("links").is_none());
}
