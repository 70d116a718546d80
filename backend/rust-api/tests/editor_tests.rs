use axum::http::{header, Method, StatusCode};
use serde_json::json;

mod common;

use common::{create_test_app, demo_session, login_as, send, send_text, TEST_EMAIL};

#[tokio::test]
async fn test_fresh_workspace_starts_from_seed() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send(&app, Method::GET, "/api/editor", Some(&cookie), None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["problem"]["title"], "Two Sum");
    assert_eq!(body["problem"]["timeComplexity"], "O(n)");
    assert_eq!(body["wizard"]["current_index"], 0);
    assert_eq!(body["wizard"]["position"], "Step 1 of 6");
    assert_eq!(body["files"]["total"], 3);
    assert_eq!(body["files"]["unsaved_count"], 1);
    assert_eq!(body["active_file"]["file"]["name"], "solution.js");
    assert_eq!(body["active_file"]["editor"]["theme"], "vs-dark");
    assert_eq!(body["settings"]["time_limit_seconds"], 2);
    assert_eq!(body["description"]["view_mode"], "split");
}

#[tokio::test]
async fn test_editor_page_includes_user() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send(&app, Method::GET, "/problems", Some(&cookie), None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["user"]["id"], "1");
    assert_eq!(body["wizard"]["steps"][0]["label"], "Problem Details");
}

#[tokio::test]
async fn test_wizard_navigation_is_clamped() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let back = send(&app, Method::POST, "/api/editor/step/previous", Some(&cookie), None).await;
    assert_eq!(back.json()["current_index"], 0);
    assert_eq!(back.json()["can_go_back"], false);

    for _ in 0..7 {
        send(&app, Method::POST, "/api/editor/step/next", Some(&cookie), None).await;
    }
    let last = send(&app, Method::POST, "/api/editor/step/next", Some(&cookie), None).await;
    let body = last.json();
    assert_eq!(body["current_index"], 5);
    assert_eq!(body["current"]["key"], "settings");
    assert_eq!(body["forward_label"], "Finish");
    assert_eq!(body["steps"][4]["state"], "completed");
}

#[tokio::test]
async fn test_wizard_jump() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let by_index = send(
        &app,
        Method::PUT,
        "/api/editor/step",
        Some(&cookie),
        Some(json!({ "index": 3 })),
    )
    .await;
    assert_eq!(by_index.status, StatusCode::OK);
    assert_eq!(by_index.json()["current"]["label"], "Test Cases");

    let by_key = send(
        &app,
        Method::PUT,
        "/api/editor/step",
        Some(&cookie),
        Some(json!({ "key": "testing" })),
    )
    .await;
    assert_eq!(by_key.json()["current_index"], 4);

    let out_of_range = send(
        &app,
        Method::PUT,
        "/api/editor/step",
        Some(&cookie),
        Some(json!({ "index": 6 })),
    )
    .await;
    assert_eq!(out_of_range.status, StatusCode::BAD_REQUEST);

    let unchanged = send(&app, Method::GET, "/api/editor", Some(&cookie), None).await;
    assert_eq!(unchanged.json()["wizard"]["current_index"], 4);
}

#[tokio::test]
async fn test_update_problem_and_tags() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let updated = send(
        &app,
        Method::PATCH,
        "/api/editor/problem",
        Some(&cookie),
        Some(json!({ "title": "Three Sum", "difficulty": "Medium", "category": "greedy" })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    let body = updated.json();
    assert_eq!(body["title"], "Three Sum");
    assert_eq!(body["difficulty"], "Medium");
    assert_eq!(body["category"], "greedy");
    assert_eq!(body["spaceComplexity"], "O(n)");

    let empty_title = send(
        &app,
        Method::PATCH,
        "/api/editor/problem",
        Some(&cookie),
        Some(json!({ "title": "" })),
    )
    .await;
    assert_eq!(empty_title.status, StatusCode::BAD_REQUEST);

    let tags = send(
        &app,
        Method::POST,
        "/api/editor/problem/tags",
        Some(&cookie),
        Some(json!({ "tag": "  Two Pointers " })),
    )
    .await;
    assert_eq!(tags.json(), json!(["Array", "Hash Table", "Two Pointers"]));

    let duplicate = send(
        &app,
        Method::POST,
        "/api/editor/problem/tags",
        Some(&cookie),
        Some(json!({ "tag": "Array" })),
    )
    .await;
    assert_eq!(duplicate.json(), json!(["Array", "Hash Table", "Two Pointers"]));

    let removed = send(
        &app,
        Method::DELETE,
        "/api/editor/problem/tags/Hash%20Table",
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(removed.json(), json!(["Array", "Two Pointers"]));
}

#[tokio::test]
async fn test_export_download() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send(&app, Method::GET, "/api/editor/export", Some(&cookie), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"two-sum.json\""
    );
    assert!(response.body.starts_with("{\n  \"title\": \"Two Sum\""));
    assert_eq!(response.json()["testCases"].as_str().unwrap().lines().count(), 7);
}

#[tokio::test]
async fn test_import_replaces_problem() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send_text(
        &app,
        "/api/editor/import",
        &cookie,
        r#"{"title": "Imported", "difficulty": "Hard", "tags": ["Graph"]}"#,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["imported"], true);
    assert_eq!(body["problem"]["title"], "Imported");
    assert_eq!(body["problem"]["difficulty"], "Hard");
    assert_eq!(body["problem"]["description"], "");
}

#[tokio::test]
async fn test_import_deduplicates_tags() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send_text(
        &app,
        "/api/editor/import",
        &cookie,
        r#"{"title": "Imported", "tags": ["Array", "Array", " ", " Graph "]}"#,
    )
    .await;

    let body = response.json();
    assert_eq!(body["imported"], true);
    assert_eq!(body["problem"]["tags"], json!(["Array", "Graph"]));
}

#[tokio::test]
async fn test_import_with_oversized_title_is_ignored() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;
    let document = json!({ "title": "x".repeat(500), "tags": ["Array"] }).to_string();

    let response = send_text(&app, "/api/editor/import", &cookie, &document).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["imported"], false);
    assert_eq!(body["problem"]["title"], "Two Sum");
}

#[tokio::test]
async fn test_malformed_import_is_ignored() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send_text(&app, "/api/editor/import", &cookie, "{ this is not json").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["imported"], false);
    assert_eq!(body["problem"]["title"], "Two Sum");
}

#[tokio::test]
async fn test_settings_choices() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let updated = send(
        &app,
        Method::PUT,
        "/api/editor/settings",
        Some(&cookie),
        Some(json!({ "time_limit_seconds": 10, "memory_limit_mb": 512 })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["time_limit_seconds"], 10);

    let rejected = send(
        &app,
        Method::PUT,
        "/api/editor/settings",
        Some(&cookie),
        Some(json!({ "time_limit_seconds": 3 })),
    )
    .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);

    let current = send(&app, Method::GET, "/api/editor/settings", Some(&cookie), None).await;
    assert_eq!(
        current.json(),
        json!({ "time_limit_seconds": 10, "memory_limit_mb": 512 })
    );
}

#[tokio::test]
async fn test_markdown_surface() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    send(
        &app,
        Method::PATCH,
        "/api/editor/problem",
        Some(&cookie),
        Some(json!({ "description": "make this bold" })),
    )
    .await;

    let inserted = send(
        &app,
        Method::POST,
        "/api/editor/description/insert",
        Some(&cookie),
        Some(json!({ "tool": "bold", "start": 5, "end": 9 })),
    )
    .await;
    assert_eq!(inserted.json()["content"], "make **this** bold");

    let preview = send(
        &app,
        Method::PUT,
        "/api/editor/description/view",
        Some(&cookie),
        Some(json!({ "mode": "preview" })),
    )
    .await;
    let body = preview.json();
    assert_eq!(body["view_mode"], "preview");
    assert_eq!(body["show_editor"], false);
    assert_eq!(body["show_preview"], true);
    assert_eq!(body["editor"]["language"], "markdown");
}

#[tokio::test]
async fn test_reset_and_isolation() {
    let app = create_test_app().await;
    let demo = demo_session(&app).await;
    let other = login_as(&app, TEST_EMAIL).await;

    send(
        &app,
        Method::PATCH,
        "/api/editor/problem",
        Some(&demo),
        Some(json!({ "title": "Changed" })),
    )
    .await;

    let other_view = send(&app, Method::GET, "/api/editor", Some(&other), None).await;
    assert_eq!(other_view.json()["problem"]["title"], "Two Sum");

    let reset = send(&app, Method::POST, "/api/editor/reset", Some(&demo), None).await;
    assert_eq!(reset.status, StatusCode::OK);
    assert_eq!(reset.json()["problem"]["title"], "Two Sum");
}
