use bcrypt::verify;
use thiserror::Error;

use crate::metrics::LOGIN_ATTEMPTS_TOTAL;
use crate::middlewares::auth::{JwtService, SessionClaims, TokenError};
use crate::models::user::UserProfile;
use crate::services::user_directory::UserDirectory;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please enter an email and password")]
    MissingCredentials,
    #[error("No user found with this email")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Failed to verify password: {0}")]
    Verification(#[from] bcrypt::BcryptError),
    #[error("Failed to issue session: {0}")]
    TokenIssue(#[from] TokenError),
}

impl AuthError {
    /// Label used for the login attempt counter
    fn outcome(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "missing_credentials",
            AuthError::UserNotFound => "user_not_found",
            AuthError::IncorrectPassword => "incorrect_password",
            AuthError::Verification(_) | AuthError::TokenIssue(_) => "error",
        }
    }
}

/// A signed session ready to be put in the cookie
#[derive(Debug)]
pub struct IssuedSession {
    pub token: String,
    pub claims: SessionClaims,
    pub user: UserProfile,
}

pub struct AuthService<'a> {
    users: &'a UserDirectory,
    jwt_service: &'a JwtService,
    session_ttl_seconds: i64,
}

impl<'a> AuthService<'a> {
    pub fn new(
        users: &'a UserDirectory,
        jwt_service: &'a JwtService,
        session_ttl_seconds: i64,
    ) -> Self {
        Self {
            users,
            jwt_service,
            session_ttl_seconds,
        }
    }

    /// Checks a credential pair against the directory.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user = self
            .users
            .find_by_email(email)
            .ok_or(AuthError::UserNotFound)?;

        if !verify(password, &user.password_hash)? {
            return Err(AuthError::IncorrectPassword);
        }

        Ok(UserProfile::from(user))
    }

    pub fn login(&self, email: &str, password: &str) -> Result<IssuedSession, AuthError> {
        let result = self.authenticate(email, password).and_then(|user| {
            let (token, claims) = self.jwt_service.issue(&user, self.session_ttl_seconds)?;
            Ok(IssuedSession {
                token,
                claims,
                user,
            })
        });

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.outcome(),
        };
        LOGIN_ATTEMPTS_TOTAL.with_label_values(&[outcome]).inc();

        result
    }
}
