//! Common test utilities for integration tests
//!
//! Builds the full application router over an in-memory job store and
//! mints bearer tokens with the same secret the app verifies against.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use jobtrack_common::Config;
use jobtrack_jobs::InMemoryJobRepository;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only"; // pragma: allowlist secret

pub fn test_config() -> Config {
    Config {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_issuer: None,
        jwt_audience: None,
        database_url: None,
        public_api_url: "http://localhost:3000/api/v1".to_string(),
        rust_log: "jobtrack=debug".to_string(),
        port: 3000,
    }
}

/// Create a signed bearer token for `user_id`
pub fn create_test_jwt(user_id: &str) -> String {
    create_test_jwt_with_secret(user_id, TEST_JWT_SECRET)
}

pub fn create_test_jwt_with_secret(user_id: &str, secret: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": user_id,
        "name": "Test User",
        "iat": now,
        "exp": now + 3600,
    });
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .expect("Failed to encode JWT")
}

/// Test application wired exactly like the server
pub struct TestApp {
    router: Router,
    pub repo: Arc<InMemoryJobRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let repo = Arc::new(InMemoryJobRepository::new());
        let router = jobtrack_app::create_app(&test_config(), repo.clone())
            .expect("Failed to create app");
        Self { router, repo }
    }

    /// Send a request and return status plus parsed JSON body (`Null` when empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&b).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    /// Create a job as `token`'s user and return the response body
    pub async fn create_job(&self, token: &str, body: Value) -> Value {
        let (status, created) = self
            .send(Method::POST, "/api/v1/jobs", Some(token), Some(body))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", created);
        created
    }
}
