use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::config::RunMode;
use crate::session::errors::SessionError;
use crate::session::models::SessionUser;

pub mod current_session;
pub mod login;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Connexion réussie.";
pub const SESSION_ACTIVE_MESSAGE: &str = "Session active.";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Email et mot de passe requis.";
pub const INVALID_REQUEST_MESSAGE: &str = "Requête invalide.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Email ou mot de passe incorrect.";
pub const INVALID_SESSION_MESSAGE: &str = "Session invalide ou expirée.";
pub const SERVER_ERROR_MESSAGE: &str = "Erreur serveur.";

const REDACTED_ERROR: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: &str, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(message, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest { message: String, error: String },
    Unauthorized { message: String, error: String },
    InternalServerError { message: String, error: String },
}

impl ApiError {
    pub fn missing_credentials() -> Self {
        ApiError::BadRequest {
            message: MISSING_CREDENTIALS_MESSAGE.to_string(),
            error: "Missing credentials".to_string(),
        }
    }

    pub fn invalid_request(detail: impl Display) -> Self {
        ApiError::BadRequest {
            message: INVALID_REQUEST_MESSAGE.to_string(),
            error: detail.to_string(),
        }
    }

    /// Same response for an unknown email and a wrong password.
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized {
            message: INVALID_CREDENTIALS_MESSAGE.to_string(),
            error: "Invalid credentials".to_string(),
        }
    }

    pub fn invalid_session(detail: impl Display) -> Self {
        ApiError::Unauthorized {
            message: INVALID_SESSION_MESSAGE.to_string(),
            error: detail.to_string(),
        }
    }

    /// Log `detail` and build a 500 that only carries it in development.
    pub fn internal(detail: impl Display, run_mode: RunMode) -> Self {
        tracing::error!(error = %detail, "Request failed with an internal error");

        let error = if run_mode.exposes_error_details() {
            detail.to_string()
        } else {
            REDACTED_ERROR.to_string()
        };

        ApiError::InternalServerError {
            message: SERVER_ERROR_MESSAGE.to_string(),
            error,
        }
    }

    pub fn from_session_error(err: SessionError, run_mode: RunMode) -> Self {
        match err {
            SessionError::InvalidCredentials => ApiError::invalid_credentials(),
            SessionError::InvalidToken(_) | SessionError::TokenExpired => {
                ApiError::invalid_session(err)
            }
            SessionError::Password(_)
            | SessionError::Token(_)
            | SessionError::DatabaseError(_)
            | SessionError::Unknown(_) => ApiError::internal(err, run_mode),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            ApiError::BadRequest { message, error } => (StatusCode::BAD_REQUEST, message, error),
            ApiError::Unauthorized { message, error } => {
                (StatusCode::UNAUTHORIZED, message, error)
            }
            ApiError::InternalServerError { message, error } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, error)
            }
        };

        (status, Json(ApiErrorBody::new(message, error))).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    success: bool,
    message: String,
    #[serde(flatten)]
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    success: bool,
    message: String,
    error: String,
}

impl ApiErrorBody {
    pub fn new(message: String, error: String) -> Self {
        Self {
            success: false,
            message,
            error,
        }
    }
}

/// User fields returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUserData {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub firstname: Option<String>,
    pub name: Option<String>,
}

impl From<&SessionUser> for SessionUserData {
    fn from(user: &SessionUser) -> Self {
        Self {
            id: user.id.0,
            email: user.email.clone(),
            role: user.role.clone(),
            firstname: user.firstname.clone(),
            name: user.name.clone(),
        }
    }
}
