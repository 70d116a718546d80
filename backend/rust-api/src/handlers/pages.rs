use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;

use crate::{
    extractors::AppQuery,
    middlewares::auth::SessionClaims,
    models::{
        page::{DashboardFilters, DashboardView, EditorPage, LoginView},
        problem::ListProblemsQuery,
        user::{sanitize_callback_url, LoginViewQuery, UserProfile},
    },
    services::AppState,
};

fn current_user(state: &AppState, claims: &SessionClaims) -> Option<UserProfile> {
    state.users.find_by_id(&claims.sub).map(UserProfile::from)
}

/// GET / - Dashboard with the filtered problem list
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    AppQuery(query): AppQuery<ListProblemsQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let list = state
        .catalog
        .list(&query)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(DashboardView {
        user: current_user(&state, &claims),
        filters: DashboardFilters::from(&query),
        list,
    }))
}

/// GET /problems - Problem editor
pub async fn problem_editor(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
) -> impl IntoResponse {
    let editor = state.workspaces.read(&claims.sub, |ws| ws.view()).await;

    Json(EditorPage {
        user: current_user(&state, &claims),
        editor,
    })
}

/// GET /login - Login view
pub async fn login_page(AppQuery(query): AppQuery<LoginViewQuery>) -> impl IntoResponse {
    Json(LoginView::new(sanitize_callback_url(
        query.callback_url.as_deref(),
    )))
}
