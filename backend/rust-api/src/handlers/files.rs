use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::{
    extractors::{AppJson, AppQuery},
    metrics::record_file_operation,
    middlewares::auth::SessionClaims,
    models::solution_file::{
        CreateFileRequest, FileListQuery, RenameFileRequest, SaveAllResponse,
        UpdateFileContentRequest,
    },
    services::{file_manager::FileError, AppState},
};

fn file_error(e: FileError) -> (StatusCode, String) {
    let status = match e {
        FileError::NotFound(_) => StatusCode::NOT_FOUND,
        FileError::EmptyName => StatusCode::BAD_REQUEST,
    };
    (status, e.to_string())
}

/// GET /api/editor/files?search= - Sidebar listing, optionally filtered by name
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    AppQuery(query): AppQuery<FileListQuery>,
) -> impl IntoResponse {
    let listing = state
        .workspaces
        .read(&claims.sub, |ws| ws.files.listing(query.search.as_deref()))
        .await;

    Json(listing)
}

/// POST /api/editor/files - Create a file and make it active
pub async fn create_file(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    AppJson(req): AppJson<CreateFileRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    let opened = state
        .workspaces
        .write(&claims.sub, |ws| {
            let id = ws.files.create(&req.name, req.language)?.id.clone();
            Ok::<_, FileError>(ws.open_file(&id))
        })
        .await
        .map_err(file_error)?
        .ok_or_else(|| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Created file disappeared".to_string(),
            )
        })?;

    record_file_operation("create");
    tracing::info!("User {} created {}", claims.sub, opened.file.name);

    Ok((StatusCode::CREATED, Json(opened)))
}

/// GET /api/editor/files/{id} - One file with its editor options
pub async fn get_file(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .workspaces
        .read(&claims.sub, |ws| ws.open_file(&id))
        .await
        .map(Json)
        .ok_or_else(|| file_error(FileError::NotFound(id)))
}

/// DELETE /api/editor/files/{id} - Returns the listing after removal
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let listing = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.files.delete(&id)?;
            Ok::<_, FileError>(ws.files.listing(None))
        })
        .await
        .map_err(file_error)?;

    record_file_operation("delete");
    tracing::info!("User {} deleted file {}", claims.sub, id);

    Ok(Json(listing))
}

/// PUT /api/editor/files/{id}/content - Replace the content, marking the file unsaved
pub async fn update_content(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateFileContentRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let opened = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.files.update_content(&id, req.content)?;
            Ok::<_, FileError>(ws.open_file(&id))
        })
        .await
        .map_err(file_error)?;

    record_file_operation("edit");

    opened
        .map(Json)
        .ok_or_else(|| file_error(FileError::NotFound(id)))
}

/// PATCH /api/editor/files/{id} - Rename, keeping the file's language
pub async fn rename_file(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    Path(id): Path<String>,
    AppJson(req): AppJson<RenameFileRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    let file = state
        .workspaces
        .write(&claims.sub, |ws| ws.files.rename(&id, &req.name).cloned())
        .await
        .map_err(file_error)?;

    record_file_operation("rename");

    Ok(Json(file))
}

/// POST /api/editor/files/{id}/save
pub async fn save_file(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let listing = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.files.save(&id)?;
            Ok::<_, FileError>(ws.files.listing(None))
        })
        .await
        .map_err(file_error)?;

    record_file_operation("save");

    Ok(Json(listing))
}

/// POST /api/editor/files/save-all
pub async fn save_all_files(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> impl IntoResponse {
    let response = state
        .workspaces
        .write(&claims.sub, |ws| SaveAllResponse {
            saved: ws.files.save_all(),
            unsaved_count: ws.files.unsaved_count(),
        })
        .await;

    record_file_operation("save_all");
    tracing::debug!("User {} saved {} files", claims.sub, response.saved);

    Json(response)
}

/// POST /api/editor/files/{id}/select - Make the file active
pub async fn select_file(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let opened = state
        .workspaces
        .write(&claims.sub, |ws| {
            ws.files.select(&id)?;
            Ok::<_, FileError>(ws.open_file(&id))
        })
        .await
        .map_err(file_error)?;

    opened
        .map(Json)
        .ok_or_else(|| file_error(FileError::NotFound(id)))
}
