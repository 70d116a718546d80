use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;

use common::{create_test_app, demo_session, send};

#[tokio::test]
async fn test_seed_listing() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send(&app, Method::GET, "/api/editor/files", Some(&cookie), None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    let names: Vec<&str> = body["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["solution.js", "solution.py", "solution.java"]);
    assert_eq!(body["active_file_id"], "1");
    assert_eq!(body["files"][0]["active"], true);
    assert_eq!(body["files"][2]["saved"], false);
    assert!(body["files"][0].get("content").is_none());
}

#[tokio::test]
async fn test_create_file_appends_extension_and_activates() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send(
        &app,
        Method::POST,
        "/api/editor/files",
        Some(&cookie),
        Some(json!({ "name": "sol", "language": "python" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["file"]["name"], "sol.py");
    assert_eq!(body["file"]["saved"], false);
    assert_eq!(body["file"]["content"], "// New python solution\n\n");
    assert_eq!(body["editor"]["language"], "python");
    let id = body["file"]["id"].as_str().unwrap().to_string();

    let listing = send(&app, Method::GET, "/api/editor/files", Some(&cookie), None).await;
    let listing = listing.json();
    assert_eq!(listing["total"], 4);
    assert_eq!(listing["active_file_id"], id.as_str());
    assert_eq!(listing["files"][3]["id"], id.as_str());
    assert_eq!(listing["unsaved_count"], 2);
}

#[tokio::test]
async fn test_create_file_rejects_bad_input() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let blank = send(
        &app,
        Method::POST,
        "/api/editor/files",
        Some(&cookie),
        Some(json!({ "name": "   " })),
    )
    .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let unknown_language = send(
        &app,
        Method::POST,
        "/api/editor/files",
        Some(&cookie),
        Some(json!({ "name": "main", "language": "cobol" })),
    )
    .await;
    assert_eq!(unknown_language.status, StatusCode::BAD_REQUEST);

    let listing = send(&app, Method::GET, "/api/editor/files", Some(&cookie), None).await;
    assert_eq!(listing.json()["total"], 3);
}

#[tokio::test]
async fn test_delete_active_file_activates_first_remaining() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send(&app, Method::DELETE, "/api/editor/files/1", Some(&cookie), None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["total"], 2);
    assert_eq!(body["active_file_id"], "2");
    assert_eq!(body["files"][0]["active"], true);

    let again = send(&app, Method::DELETE, "/api/editor/files/1", Some(&cookie), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_save_and_save_all() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let edited = send(
        &app,
        Method::PUT,
        "/api/editor/files/2/content",
        Some(&cookie),
        Some(json!({ "content": "print('hi')" })),
    )
    .await;
    assert_eq!(edited.status, StatusCode::OK);
    assert_eq!(edited.json()["file"]["content"], "print('hi')");
    assert_eq!(edited.json()["file"]["saved"], false);

    let saved = send(&app, Method::POST, "/api/editor/files/2/save", Some(&cookie), None).await;
    assert_eq!(saved.status, StatusCode::OK);
    assert_eq!(saved.json()["unsaved_count"], 1);

    let save_all = send(
        &app,
        Method::POST,
        "/api/editor/files/save-all",
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(save_all.json(), json!({ "saved": 1, "unsaved_count": 0 }));

    let missing = send(&app, Method::POST, "/api/editor/files/42/save", Some(&cookie), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rename_select_and_get() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let renamed = send(
        &app,
        Method::PATCH,
        "/api/editor/files/3",
        Some(&cookie),
        Some(json!({ "name": "TwoSum" })),
    )
    .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.json()["name"], "TwoSum.java");

    let selected = send(&app, Method::POST, "/api/editor/files/3/select", Some(&cookie), None).await;
    assert_eq!(selected.json()["file"]["name"], "TwoSum.java");
    assert_eq!(selected.json()["editor"]["language"], "java");

    let fetched = send(&app, Method::GET, "/api/editor/files/3", Some(&cookie), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert!(fetched.json()["file"]["content"]
        .as_str()
        .unwrap()
        .contains("public class Solution"));

    let missing = send(&app, Method::GET, "/api/editor/files/nope", Some(&cookie), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_filters_listing_only() {
    let app = create_test_app().await;
    let cookie = demo_session(&app).await;

    let response = send(
        &app,
        Method::GET,
        "/api/editor/files?search=PY",
        Some(&cookie),
        None,
    )
    .await;

    let body = response.json();
    assert_eq!(body["files"].as_array().unwrap().len(), 1);
    assert_eq!(body["files"][0]["name"], "solution.py");
    assert_eq!(body["total"], 3);
}
