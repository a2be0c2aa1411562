use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::session::models::SessionUser;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated session in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: SessionUser,
}

/// Middleware that validates the bearer session token and adds the user to request extensions
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let user = state.session_service.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Session token rejected");
        ApiError::invalid_session(e)
    })?;

    req.extensions_mut().insert(AuthenticatedSession { user });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::invalid_session("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::invalid_session("Invalid Authorization header"))?;

    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::invalid_session(
                "Invalid Authorization header format. Expected: Bearer <token>",
            )
        })
}
