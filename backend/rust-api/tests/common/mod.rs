#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use problem_studio_api::{
    config::{AuthConfig, Config, RunnerConfig, SessionConfig},
    create_router,
    services::AppState,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const TEST_EMAIL: &str = "test@example.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const METRICS_AUTH: &str = "metrics:secret";

/// Test configuration: fixed secret, cheap bcrypt, no simulated runner delay
pub fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        session: SessionConfig {
            secret: "test-secret".to_string(),
            ttl_seconds: 3600,
            cookie_secure: false,
        },
        auth: AuthConfig {
            users_file: None,
            bcrypt_cost: 4,
        },
        runner: RunnerConfig {
            run_all_delay_ms: 0,
            custom_delay_ms: 0,
        },
        metrics_auth: METRICS_AUTH.to_string(),
    }
}

pub async fn create_test_app() -> Router {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let app_state = Arc::new(
        AppState::new(test_config())
            .await
            .expect("Failed to initialize test app state"),
    );

    create_router(app_state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// `name=value` part of the session Set-Cookie header
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("session_token="))
            .map(|v| v.split(';').next().unwrap_or_default().to_string())
    }

    pub fn set_cookie_header(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

/// Sends one request; `body` is sent as JSON when present
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    into_test_response(app.clone().oneshot(request).await.unwrap()).await
}

/// Sends a raw text body (used by the import endpoint)
pub async fn send_text(app: &Router, uri: &str, cookie: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(body.to_string()))
        .unwrap();

    into_test_response(app.clone().oneshot(request).await.unwrap()).await
}

async fn into_test_response(response: axum::response::Response) -> TestResponse {
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

pub async fn login(app: &Router, email: &str, password: &str) -> TestResponse {
    send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

/// Logs in a demo user and returns the cookie to send back
pub async fn login_as(app: &Router, email: &str) -> String {
    let response = login(app, email, DEMO_PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    response
        .session_cookie()
        .expect("login did not set a session cookie")
}

pub async fn demo_session(app: &Router) -> String {
    login_as(app, DEMO_EMAIL).await
}
