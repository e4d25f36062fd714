//! Health Check API Tests

use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_store() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["checks"]["store"]["backend"], "memory");
    assert!(body["checks"]["store"]["status"].is_string());
    assert_ne!(body["status"], "unhealthy");
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_counters() {
    let app = TestApp::new();
    app.create_alice().await;

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("user_registry_http_requests_total"));
    assert!(text.contains("user_registry_user_operations_total"));
}
