use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::{
    extractors::AppJson,
    metrics::PROBLEM_IMPORTS_TOTAL,
    middlewares::auth::SessionClaims,
    models::{
        editor::{InsertMarkdownRequest, SetViewModeRequest},
        problem::{AddTagRequest, ImportResponse, UpdateProblemRequest, UpdateSettingsRequest},
        wizard::JumpStepRequest,
    },
    services::{wizard::WizardError, workspace::SettingsError, AppState},
};

fn wizard_error(e: WizardError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, e.to_string())
}

/// GET /api/editor - Full editor view
pub async fn get_editor(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> impl IntoResponse {
    let view = state.workspaces.read(&claims.sub, |ws| ws.view()).await;
    Json(view)
}

/// PATCH /api/editor/problem - Update some fields of the problem record
pub async fn update_problem(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    AppJson(req): AppJson<UpdateProblemRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    let problem = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.apply_update(req);
            ws.problem.clone()
        })
        .await;

    tracing::debug!("User {} updated problem \"{}\"", claims.sub, problem.title);
    Ok(Json(problem))
}

/// POST /api/editor/problem/tags - Add a tag (blank and duplicate tags are ignored)
pub async fn add_tag(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    AppJson(req): AppJson<AddTagRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    let tags = state
        .workspaces
        .write(&claims.sub, |ws| {
            if !ws.add_tag(&req.tag) {
                tracing::debug!("Tag {:?} ignored", req.tag);
            }
            ws.problem.tags.clone()
        })
        .await;

    Ok(Json(tags))
}

/// DELETE /api/editor/problem/tags/{tag}
pub async fn remove_tag(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    Path(tag): Path<String>,
) -> impl IntoResponse {
    let tags = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.remove_tag(&tag);
            ws.problem.tags.clone()
        })
        .await;

    Json(tags)
}

/// GET /api/editor/export - Problem record as a JSON download
pub async fn export_problem(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (body, file_name) = state
        .workspaces
        .read(&claims.sub, |ws| (ws.export_json(), ws.export_file_name()))
        .await;

    let body = body.map_err(|e| {
        tracing::error!("Failed to serialize problem: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let disposition = format!("attachment; filename=\"{}\"", file_name.replace('"', ""));

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// POST /api/editor/import - Replace the problem record with an uploaded JSON document.
/// A document that does not parse, or whose title is out of range, is logged and ignored.
pub async fn import_problem(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    body: String,
) -> impl IntoResponse {
    let response = state
        .workspaces
        .write(&claims.sub, |ws| {
            let imported = match ws.import_json(&body) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Ignoring problem import: {}", e);
                    false
                }
            };
            ImportResponse {
                imported,
                problem: ws.problem.clone(),
            }
        })
        .await;

    let outcome = if response.imported { "imported" } else { "rejected" };
    PROBLEM_IMPORTS_TOTAL.with_label_values(&[outcome]).inc();

    Json(response)
}

/// POST /api/editor/reset - Back to the seed workspace
pub async fn reset_workspace(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> impl IntoResponse {
    let workspace = state.workspaces.reset(&claims.sub).await;
    Json(workspace.view())
}

/// POST /api/editor/step/next
pub async fn next_step(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> impl IntoResponse {
    let view = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.wizard.next();
            ws.wizard.view()
        })
        .await;

    Json(view)
}

/// POST /api/editor/step/previous
pub async fn previous_step(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> impl IntoResponse {
    let view = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.wizard.previous();
            ws.wizard.view()
        })
        .await;

    Json(view)
}

/// PUT /api/editor/step - Jump to a step by index or key
pub async fn jump_to_step(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    AppJson(req): AppJson<JumpStepRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let view = state
        .workspaces
        .write(&claims.sub, |ws| {
            match &req {
                JumpStepRequest::Index { index } => ws.wizard.jump_to(*index),
                JumpStepRequest::Key { key } => ws.wizard.jump_to_key(key),
            }?;
            Ok::<_, WizardError>(ws.wizard.view())
        })
        .await
        .map_err(wizard_error)?;

    Ok(Json(view))
}

/// GET /api/editor/settings
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> impl IntoResponse {
    let settings = state.workspaces.read(&claims.sub, |ws| ws.settings).await;
    Json(settings)
}

/// PUT /api/editor/settings - Time and memory limits, from the offered choices only
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    AppJson(req): AppJson<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let settings = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.update_settings(req)?;
            Ok::<_, SettingsError>(ws.settings)
        })
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(settings))
}

/// PUT /api/editor/description/view - Switch between edit, split and preview
pub async fn set_description_view(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    AppJson(req): AppJson<SetViewModeRequest>,
) -> impl IntoResponse {
    let view = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.description_view = req.mode;
            ws.description()
        })
        .await;

    Json(view)
}

/// POST /api/editor/description/insert - Apply a markdown toolbar action
pub async fn insert_markdown(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    AppJson(req): AppJson<InsertMarkdownRequest>,
) -> impl IntoResponse {
    let view = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.insert_into_description(req.tool, req.start, req.end);
            ws.description()
        })
        .await;

    Json(view)
}
