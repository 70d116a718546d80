use axum::http::{header, Method, StatusCode};
use base64::{engine::general_purpose, Engine as _};

mod common;

use common::{create_test_app, demo_session, send, METRICS_AUTH};

#[tokio::test]
async fn test_anonymous_editor_request_redirects_to_login() {
    let app = create_test_app().await;

    let response = send(&app, Method::GET, "/problems", None, None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/login?callbackUrl=%2Fproblems"));
}

#[tokio::test]
async fn test_anonymous_api_request_redirects_to_login() {
    let app = create_test_app().await;

    let response = send(&app, Method::GET, "/api/editor/files", None, None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location(),
        Some("/login?callbackUrl=%2Fapi%2Feditor%2Ffiles")
    );
}

#[tokio::test]
async fn test_signed_in_user_is_sent_away_from_login() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send(&app, Method::GET, "/login", Some(&cookie), None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/"));
}

#[tokio::test]
async fn test_login_view_is_public() {
    let app = create_test_app().await;

    let response = send(
        &app,
        Method::GET,
        "/login?callbackUrl=%2Fproblems",
        None,
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["callbackUrl"], "/problems");
    assert_eq!(body["email"], "demo@example.com");

    let off_site = send(
        &app,
        Method::GET,
        "/login?callbackUrl=%2F%5Cevil.example.com",
        None,
        None,
    )
    .await;
    assert_eq!(off_site.json()["callbackUrl"], "/");
}

#[tokio::test]
async fn test_secure_cookie_name_is_accepted() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;
    let secure = cookie.replacen("session_token=", "__Secure-session_token=", 1);

    let response = send(&app, Method::GET, "/problems", Some(&secure), None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_garbage_cookie_counts_as_anonymous() {
    let app = create_test_app().await;

    let response = send(
        &app,
        Method::GET,
        "/problems",
        Some("session_token=not-a-jwt"),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_public_assets_pass_through() {
    let app = create_test_app().await;

    // No such routes: the guard lets them through and the router answers 404
    for path in ["/assets/app.css", "/favicon.ico", "/logo.png", "/main.js"] {
        let response = send(&app, Method::GET, path, None, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", path);
    }
}

#[tokio::test]
async fn test_health_is_public() {
    let app = create_test_app().await;

    let response = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");
    assert!(response.headers.contains_key(header::CONTENT_SECURITY_POLICY));
    assert!(response.headers.contains_key("x-trace-id"));
}

#[tokio::test]
async fn test_trace_id_is_echoed() {
    let app = create_test_app().await;

    let request = axum::http::Request::builder()
        .uri("/health")
        .header("x-trace-id", "trace-123")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.headers()["x-trace-id"], "trace-123");
}

#[tokio::test]
async fn test_metrics_require_basic_auth() {
    let app = create_test_app().await;

    let anonymous = send(&app, Method::GET, "/metrics", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let request = axum::http::Request::builder()
        .uri("/metrics")
        .header(
            header::AUTHORIZATION,
            format!("Basic {}", general_purpose::STANDARD.encode(METRICS_AUTH)),
        )
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&body).contains("http_requests_total"));
}
