//! Common Test Utilities
//!
//! Shared helpers and fixtures. Every test gets its own in-memory store.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use user_registry::config::Settings;
use user_registry::startup::{build_router, AppState};

/// Test application over a fresh in-memory store
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    pub fn new() -> Self {
        let settings = Settings::in_memory().expect("default settings should load");
        let router = build_router(AppState::in_memory(settings));
        let server = TestServer::new(router).expect("test server should start");

        Self { server }
    }

    /// Create a user and return the response body, asserting 201
    pub async fn create_user(&self, name: &str, email: &str, password: &str) -> Value {
        let response = self
            .server
            .post("/api/v1/users")
            .json(&json!({ "name": name, "email": email, "password": password }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()
    }

    /// Create the canonical Alice user
    pub async fn create_alice(&self) -> Value {
        self.create_user("Alice", ALICE_EMAIL, ALICE_PASSWORD).await
    }
}

pub const ALICE_EMAIL: &str = "alice@example.com";
pub const ALICE_PASSWORD: &str = "secret123";
