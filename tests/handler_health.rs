mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{StubCreditInquiry, create_test_context};
use user_admission::routes::router;

#[tokio::test]
async fn test_health_endpoint_success() {
    let ctx = create_test_context("RandomClientName", StubCreditInquiry::returning(600));
    let server = TestServer::new(router(ctx.state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["credit_strategies"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let ctx = create_test_context("RandomClientName", StubCreditInquiry::returning(600));
    let server = TestServer::new(router(ctx.state)).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("credit_strategies").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded_when_client_store_down() {
    let ctx = create_test_context("RandomClientName", StubCreditInquiry::returning(600));
    ctx.clients.set_healthy(false);
    let server = TestServer::new(router(ctx.state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert_eq!(json["checks"]["credit_strategies"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_lists_registered_strategies() {
    let ctx = create_test_context("RandomClientName", StubCreditInquiry::returning(600));
    let server = TestServer::new(router(ctx.state)).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();
    let message = json["checks"]["credit_strategies"]["message"]
        .as_str()
        .unwrap()
        .to_string();

    for name in ["Unclassified", "ImportantClient", "VeryImportantClient"] {
        assert!(message.contains(name), "'{}' missing from '{}'", name, message);
    }
}
