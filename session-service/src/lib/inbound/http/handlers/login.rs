use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::SessionUserData;
use super::LOGIN_SUCCESS_MESSAGE;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::Session;
use crate::domain::session::models::Username;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected login body");
        ApiError::invalid_request(rejection.body_text())
    })?;

    state
        .session_service
        .login(body.try_into_command()?)
        .await
        .map_err(|e| ApiError::from_session_error(e, state.run_mode))
        .map(|ref session| ApiSuccess::new(StatusCode::OK, LOGIN_SUCCESS_MESSAGE, session.into()))
}

/// HTTP request body for opening a session (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    username: Option<String>,
    password: Option<String>,
    remember_me: Option<bool>,
}

#[derive(Debug, Clone, Error)]
enum ParseLoginRequestError {
    #[error("Missing credentials")]
    MissingCredentials,
}

impl LoginRequestBody {
    fn try_into_command(self) -> Result<LoginCommand, ParseLoginRequestError> {
        let username = self.username.and_then(|value| Username::new(value).ok());
        let password = self.password.filter(|value| !value.is_empty());

        let (Some(username), Some(password)) = (username, password) else {
            return Err(ParseLoginRequestError::MissingCredentials);
        };

        Ok(LoginCommand::new(
            username,
            password,
            self.remember_me.unwrap_or(false),
        ))
    }
}

impl From<ParseLoginRequestError> for ApiError {
    fn from(err: ParseLoginRequestError) -> Self {
        match err {
            ParseLoginRequestError::MissingCredentials => ApiError::missing_credentials(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user: SessionUserData,
}

impl From<&Session> for LoginResponseData {
    fn from(session: &Session) -> Self {
        Self {
            token: session.token.clone(),
            user: (&session.user).into(),
        }
    }
}
