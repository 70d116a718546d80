use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::DateTime;
use serde_json::json;
use std::sync::Arc;

use crate::{
    extractors::AppJson,
    middlewares::auth::{removal_cookie, session_cookie, verified_session},
    models::user::{sanitize_callback_url, LoginRequest, LoginResponse, SessionResponse, UserProfile},
    services::{
        auth_service::{AuthError, AuthService},
        AppState,
    },
};

fn auth_error(e: AuthError) -> (StatusCode, String) {
    let status = match e {
        AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
        AuthError::UserNotFound | AuthError::IncorrectPassword => StatusCode::UNAUTHORIZED,
        AuthError::Verification(_) | AuthError::TokenIssue(_) => {
            tracing::error!("Login failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, e.to_string())
}

/// POST /api/auth/login - Check credentials and start a session
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    tracing::info!("Login attempt for user: {}", req.email);

    let ttl_seconds = state.config.session.ttl_seconds;
    let service = AuthService::new(&state.users, &state.tokens, ttl_seconds);

    let session = service.login(&req.email, &req.password).map_err(|e| {
        tracing::warn!("Failed login for {}: {}", req.email, e);
        auth_error(e)
    })?;

    tracing::info!("User {} logged in", session.user.id);

    let jar = jar.add(session_cookie(
        session.token,
        ttl_seconds,
        state.config.session.cookie_secure,
    ));

    let response = LoginResponse {
        user: session.user,
        callback_url: sanitize_callback_url(req.callback_url.as_deref()),
    };

    Ok((StatusCode::OK, jar, Json(response)))
}

/// POST /api/auth/logout - Drop the session cookie
pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    if let Some(claims) = verified_session(&state, &jar) {
        tracing::info!("User {} logged out", claims.sub);
    }

    let jar = jar.add(removal_cookie(state.config.session.cookie_secure));
    (StatusCode::NO_CONTENT, jar)
}

/// GET /api/auth/session - Current session, or `{}` when signed out
pub async fn get_session(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    let session = verified_session(&state, &jar).and_then(|claims| {
        let user = state.users.find_by_id(&claims.sub)?;
        let expires = DateTime::from_timestamp(claims.exp as i64, 0)?;
        Some(SessionResponse {
            user: UserProfile::from(user),
            expires,
        })
    });

    match session {
        Some(session) => Json(json!(session)),
        None => Json(json!({})),
    }
}
