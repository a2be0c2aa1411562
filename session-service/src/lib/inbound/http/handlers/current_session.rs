use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use super::SessionUserData;
use super::SESSION_ACTIVE_MESSAGE;
use crate::inbound::http::middleware::AuthenticatedSession;

/// Return the user carried by the presented session token.
pub async fn current_session(
    Extension(session): Extension<AuthenticatedSession>,
) -> ApiSuccess<CurrentSessionResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        SESSION_ACTIVE_MESSAGE,
        CurrentSessionResponseData {
            user: (&session.user).into(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentSessionResponseData {
    pub user: SessionUserData,
}
