//! User API Tests
//!
//! End-to-end tests for the `/api/v1/users` routes over the in-memory store.

use axum::http::StatusCode;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{TestApp, ALICE_EMAIL};

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let app = TestApp::new();

    let created = app.create_alice().await;
    assert_eq!(created["id"], "1");
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["email"], ALICE_EMAIL);
    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());

    let response = app.server.get("/api/v1/users/1").await;
    response.assert_status_ok();

    let fetched = response.json::<Value>();
    assert_eq!(fetched["id"], "1");
    assert_eq!(fetched["name"], "Alice");
    assert_eq!(fetched["email"], ALICE_EMAIL);
}

#[tokio::test]
async fn test_lookup_unknown_email_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/v1/users/lookup")
        .add_query_param("email", "nobody@example.com")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "User not found");
}

#[tokio::test]
async fn test_lookup_by_email_finds_user() {
    let app = TestApp::new();
    app.create_alice().await;

    let response = app
        .server
        .get("/api/v1/users/lookup")
        .add_query_param("email", ALICE_EMAIL)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], "1");
}

#[tokio::test]
async fn test_lookup_without_email_is_bad_request() {
    let app = TestApp::new();

    let response = app.server.get("/api/v1/users/lookup").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Missing required fields: email"
    );
}

#[tokio::test]
async fn test_create_with_missing_fields_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/users")
        .json(&json!({ "email": ALICE_EMAIL, "password": "  " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Missing required fields: name, password"
    );
}

#[tokio::test]
async fn test_create_with_rule_violations_lists_each() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/users")
        .json(&json!({ "name": "Alice", "email": "not-an-email", "password": "short" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));

    // Nothing was stored
    let list = app.server.get("/api/v1/users").await.json::<Value>();
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn test_padded_name_is_stored_trimmed() {
    let app = TestApp::new();
    let padded = format!("{}{}", " ".repeat(20), "a".repeat(100));

    let created = app.create_user(&padded, ALICE_EMAIL, "secret123").await;

    assert_eq!(created["name"], "a".repeat(100));
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = TestApp::new();
    app.create_alice().await;

    let response = app
        .server
        .post("/api/v1/users")
        .json(&json!({ "name": "Other", "email": ALICE_EMAIL, "password": "another123" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_users_in_id_order() {
    let app = TestApp::new();
    let mut emails = Vec::new();
    for i in 0..3 {
        let name: String = Name().fake();
        let email = format!("{i}.{}", SafeEmail().fake::<String>());
        app.create_user(&name, &email, "password1").await;
        emails.push(email);
    }

    let response = app.server.get("/api/v1/users").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["total"], 3);
    let listed: Vec<&str> = body["users"]
        .as_array()
        .expect("users array")
        .iter()
        .filter_map(|u| u["email"].as_str())
        .collect();
    assert_eq!(listed, emails.iter().map(String::as_str).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_get_with_non_numeric_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.server.get("/api/v1/users/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let app = TestApp::new();
    app.create_alice().await;

    let response = app
        .server
        .put("/api/v1/users/1")
        .json(&json!({
            "name": "Alice Liddell",
            "email": "liddell@example.com",
            "password": "wonderland1"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], "1");
    assert_eq!(body["name"], "Alice Liddell");
    assert_eq!(body["email"], "liddell@example.com");

    // The old email is free again
    app.server
        .get("/api/v1/users/lookup")
        .add_query_param("email", ALICE_EMAIL)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_to_taken_email_is_conflict() {
    let app = TestApp::new();
    app.create_alice().await;
    app.create_user("Bob", "bob@example.com", "builder42").await;

    let response = app
        .server
        .put("/api/v1/users/2")
        .json(&json!({ "name": "Bob", "email": ALICE_EMAIL, "password": "builder42" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_unknown_user_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/api/v1/users/99")
        .json(&json!({ "name": "Ghost", "email": "ghost@example.com", "password": "boo12345" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = TestApp::new();
    app.create_alice().await;

    app.server
        .delete("/api/v1/users/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .get("/api/v1/users/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.server
        .delete("/api/v1/users/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let app = TestApp::new();
    app.create_alice().await;
    app.server.delete("/api/v1/users/1").await;

    let created = app.create_alice().await;

    assert_eq!(created["id"], "2");
}

#[tokio::test]
async fn test_audit_trail_survives_deletion() {
    let app = TestApp::new();
    app.create_alice().await;
    app.server
        .put("/api/v1/users/1")
        .json(&json!({ "name": "Alicia", "email": ALICE_EMAIL, "password": "secret123" }))
        .await
        .assert_status_ok();
    app.server.delete("/api/v1/users/1").await;

    let response = app.server.get("/api/v1/users/1/audit").await;
    response.assert_status_ok();

    let entries = response.json::<Vec<Value>>();
    let actions: Vec<&str> = entries
        .iter()
        .filter_map(|e| e["action"].as_str())
        .collect();
    assert_eq!(actions, vec!["created", "updated", "deleted"]);
    assert_eq!(entries[1]["detail"], "changed: name");
}

#[tokio::test]
async fn test_audit_trail_for_unknown_user_is_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/api/v1/users/7/audit").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
