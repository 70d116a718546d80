use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::{extractors::AppQuery, models::problem::ListProblemsQuery, services::AppState};

/// GET /api/problems - Filter the problem list by text, difficulty and status
pub async fn list_problems(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<ListProblemsQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let response = state.catalog.list(&query).map_err(|e| {
        tracing::warn!("Rejected problem list query: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    Ok((StatusCode::OK, Json(response)))
}
