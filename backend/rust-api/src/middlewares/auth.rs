use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::user::UserProfile;
use crate::services::AppState;

pub const SESSION_COOKIE: &str = "session_token";
/// Name browsers use for the cookie when it was set with the `__Secure-` prefix
pub const SECURE_SESSION_COOKIE: &str = "__Secure-session_token";

/// Characters `encodeURIComponent` leaves alone: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const PUBLIC_ASSET_EXTENSIONS: [&str; 8] = [
    ".jpg", ".jpeg", ".png", ".gif", ".svg", ".ico", ".css", ".js",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionClaims {
    pub sub: String, // user_id
    pub name: String,
    pub email: String,
    pub exp: usize,  // expiration timestamp
    pub iat: usize,  // issued at timestamp
    pub jti: String, // token id
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    ExpiredToken,
    #[error("Invalid token signature")]
    InvalidSignature,
}

pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a session for `user` valid for `ttl_seconds` from now.
    pub fn issue(
        &self,
        user: &UserProfile,
        ttl_seconds: i64,
    ) -> Result<(String, SessionClaims), TokenError> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            exp: (now + ttl_seconds) as usize,
            iat: now as usize,
            jti: Uuid::new_v4().to_string(),
        };

        let token = self.generate_token(&claims)?;
        Ok((token, claims))
    }

    pub fn generate_token(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        encode(&Header::default(), claims, &self.encoding_key).map_err(|_| TokenError::InvalidToken)
    }

    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let validation = Validation::default();

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::ExpiredToken,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::InvalidToken,
            })
    }
}

/// Outcome of the routing guard for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Signed-in users are sent away from the login view, public paths pass, and
/// everything else requires a session.
pub fn guard_decision(path: &str, authenticated: bool) -> GuardDecision {
    if authenticated && path == "/login" {
        return GuardDecision::Redirect("/".to_string());
    }

    if is_public_asset(path) || is_public_route(path) {
        return GuardDecision::Allow;
    }

    if !authenticated {
        return GuardDecision::Redirect(login_redirect(path));
    }

    GuardDecision::Allow
}

/// `/login?callbackUrl=<path>` with the path encoded like `encodeURIComponent`
pub fn login_redirect(path: &str) -> String {
    format!(
        "/login?callbackUrl={}",
        utf8_percent_encode(path, URI_COMPONENT)
    )
}

fn is_public_asset(path: &str) -> bool {
    path.starts_with("/assets/")
        || path == "/favicon.ico"
        || PUBLIC_ASSET_EXTENSIONS
            .iter()
            .any(|extension| path.ends_with(extension))
}

fn is_public_route(path: &str) -> bool {
    path.starts_with("/login")
        || path.starts_with("/api/auth")
        || path == "/health"
        || path == "/metrics"
}

/// Session token from either cookie name, plain name first
pub fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(SESSION_COOKIE)
        .or_else(|| jar.get(SECURE_SESSION_COOKIE))
        .map(|cookie| cookie.value())
}

/// Verified claims of the request's session cookie, if any
pub fn verified_session(state: &AppState, jar: &CookieJar) -> Option<SessionClaims> {
    let token = session_token(jar)?;
    match state.tokens.validate_token(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!("Ignoring session cookie: {}", e);
            None
        }
    }
}

pub fn session_cookie(token: String, ttl_seconds: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(ttl_seconds))
        .build()
}

/// Expired, empty session cookie that makes the browser drop the session
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::ZERO)
        .build()
}

/// Routing guard wrapping every route
pub async fn session_guard_middleware(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let claims = verified_session(&state, &jar);
    let path = request.uri().path().to_string();

    match guard_decision(&path, claims.is_some()) {
        GuardDecision::Redirect(location) => {
            tracing::debug!("Guard redirecting {} to {}", path, location);
            Redirect::temporary(&location).into_response()
        }
        GuardDecision::Allow => {
            if let Some(claims) = claims {
                request.extensions_mut().insert(claims);
            }
            next.run(request).await
        }
    }
}
