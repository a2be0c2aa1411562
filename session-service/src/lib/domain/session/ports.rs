use async_trait::async_trait;

use crate::domain::session::models::CredentialRecord;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionUser;
use crate::session::errors::SessionError;

/// Port for session domain service operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `command` - Username, plaintext password and remember-me flag
    ///
    /// # Returns
    /// Issued session with token and user snapshot
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (indistinguishable)
    /// * `Password` - Stored hash could not be verified
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Credential lookup failed
    async fn login(&self, command: LoginCommand) -> Result<Session, SessionError>;

    /// Validate a presented session token.
    ///
    /// # Returns
    /// User snapshot embedded at issuance
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its expiration
    /// * `InvalidToken` - Signature or payload is invalid
    fn validate_token(&self, token: &str) -> Result<SessionUser, SessionError>;
}

/// Read access to the credential store.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Retrieve the credential record whose email equals `email` exactly.
    ///
    /// # Returns
    /// Optional credential record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CredentialRecord>, SessionError>;
}
