use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User held in the in-memory directory
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// bcrypt hash of the seed password
    pub password_hash: String,
    pub image: Option<String>,
}

/// Directory entry as it appears in a users file (plain-text password, hashed on load)
#[derive(Debug, Clone, Deserialize)]
pub struct UserSeed {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// User profile returned to client (without sensitive data)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        UserProfile {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.image.clone(),
        }
    }
}

/// Credential pair posted to the login endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Where the client should land after signing in
    pub callback_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserProfile,
    pub callback_url: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserProfile,
    pub expires: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginViewQuery {
    pub callback_url: Option<String>,
}

/// Keeps post-login redirects on this site: only absolute local paths survive.
/// Browsers read `\` as `/`, so backslashes are refused along with `//` and
/// control characters.
pub fn sanitize_callback_url(callback_url: Option<&str>) -> String {
    match callback_url {
        Some(url) if is_local_path(url) => url.to_string(),
        _ => "/".to_string(),
    }
}

fn is_local_path(url: &str) -> bool {
    url.starts_with('/')
        && !url.starts_with("//")
        && !url.chars().any(|c| c == '\\' || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_callback_url() {
        assert_eq!(sanitize_callback_url(Some("/problems")), "/problems");
        assert_eq!(sanitize_callback_url(None), "/");
        assert_eq!(sanitize_callback_url(Some("https://evil.test")), "/");
        assert_eq!(sanitize_callback_url(Some("//evil.test")), "/");
        assert_eq!(sanitize_callback_url(Some("/\\evil.test")), "/");
        assert_eq!(sanitize_callback_url(Some("/problems\\x")), "/");
        assert_eq!(sanitize_callback_url(Some("/\t/evil.test")), "/");
    }

    #[test]
    fn test_login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"email":"demo@example.com"}"#).unwrap();
        assert_eq!(req.email, "demo@example.com");
        assert!(req.password.is_empty());
        assert!(req.callback_url.is_none());
    }
}
