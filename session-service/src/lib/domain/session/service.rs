use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionUser;
use crate::session::errors::SessionError;
use crate::session::ports::CredentialRepository;
use crate::session::ports::SessionServicePort;

/// Domain service implementation for session operations.
///
/// Concrete implementation of SessionServicePort with dependency injection.
pub struct SessionService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
}

impl<CR> SessionService<CR>
where
    CR: CredentialRepository,
{
    /// Create a new session service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password verification and token issuance
    pub fn new(repository: Arc<CR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<CR> SessionServicePort for SessionService<CR>
where
    CR: CredentialRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<Session, SessionError> {
        let LoginCommand {
            username,
            password,
            remember_me,
        } = command;

        let record = self.repository.find_by_email(username.as_str()).await?;
        let authenticator = Arc::clone(&self.authenticator);

        // Hashing is CPU bound; both branches run it off the async workers
        let Some(record) = record else {
            let rejection = tokio::task::spawn_blocking(move || authenticator.reject(&password))
                .await
                .map_err(|e| SessionError::Unknown(e.to_string()))?;

            tracing::warn!(username = %username, reason = "unknown_username", "Login rejected");
            return Err(rejection.into());
        };

        let user = SessionUser::from(&record);
        let payload = user.clone();

        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &record.password_hash, &payload, remember_me)
        })
        .await
        .map_err(|e| SessionError::Unknown(e.to_string()))?;

        let issued = match outcome {
            Ok(issued) => issued,
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(user_id = %user.id, reason = "password_mismatch", "Login rejected");
                return Err(SessionError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            user_id = %user.id,
            role = %user.role,
            remember_me,
            expires_at = %issued.expires_at,
            "Session issued"
        );

        Ok(Session {
            token: issued.token,
            user,
            issued_at: issued.issued_at,
            expires_at: issued.expires_at,
        })
    }

    fn validate_token(&self, token: &str) -> Result<SessionUser, SessionError> {
        self.authenticator
            .validate_token::<SessionUser>(token)
            .map(|claims| claims.payload)
            .map_err(SessionError::from)
    }
}
