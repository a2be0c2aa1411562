use auth::AuthenticationError;
use auth::JwtError;
use thiserror::Error;

/// Error for Username construction failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username is empty")]
    Empty,
}

/// Top-level error for login and session operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    // Authentication failures (user-correctable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    #[error("Session token expired")]
    TokenExpired,

    // Infrastructure errors
    #[error("Password verification failed: {0}")]
    Password(String),

    #[error("Token generation failed: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<JwtError> for SessionError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingFailed(msg) => SessionError::Token(msg),
            JwtError::TokenExpired => SessionError::TokenExpired,
            JwtError::InvalidToken(msg) | JwtError::DecodingFailed(msg) => {
                SessionError::InvalidToken(msg)
            }
        }
    }
}

impl From<AuthenticationError> for SessionError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidCredentials => SessionError::InvalidCredentials,
            AuthenticationError::PasswordError(e) => SessionError::Password(e.to_string()),
            AuthenticationError::JwtError(e) => e.into(),
        }
    }
}

impl From<sqlx::Error> for SessionError {
    fn from(err: sqlx::Error) -> Self {
        SessionError::DatabaseError(err.to_string())
    }
}
