use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::{
    extractors::AppJson,
    middlewares::auth::SessionClaims,
    models::test_run::{CustomRunRequest, CustomRunResponse},
    services::AppState,
};

/// GET /api/editor/tests - Latest results and custom output
pub async fn get_results(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> impl IntoResponse {
    let view = state.workspaces.read(&claims.sub, |ws| ws.test_view()).await;
    Json(view)
}

/// POST /api/editor/tests/run - Run the predefined cases (simulated)
pub async fn run_tests(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> impl IntoResponse {
    tracing::info!("User {} started a test run", claims.sub);

    // The workspace is only locked once the simulated run has finished
    let results = state.test_runner.run_all().await;

    let view = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.test_results = results;
            ws.test_view()
        })
        .await;

    if let Some(summary) = &view.summary {
        tracing::info!(
            "Test run for user {}: {}/{} passed",
            claims.sub,
            summary.passed,
            summary.total
        );
    }

    Json(view)
}

/// POST /api/editor/tests/custom - Echo run against custom input
pub async fn run_custom(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    AppJson(req): AppJson<CustomRunRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    let output = state.test_runner.run_custom(&req.input).await;

    state
        .workspaces
        .write(&claims.sub, |ws| ws.custom_output = Some(output.clone()))
        .await;

    Ok(Json(CustomRunResponse { output }))
}

/// DELETE /api/editor/tests - Clear results
pub async fn reset_results(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> impl IntoResponse {
    let view = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.reset_tests();
            ws.test_view()
        })
        .await;

    Json(view)
}
