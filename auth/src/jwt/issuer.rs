use chrono::DateTime;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;
use super::policy::ExpirationPolicy;

/// Signed session token with its validity window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies time-bound session tokens.
///
/// The signing key and the expiration policy are fixed at construction.
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    policy: ExpirationPolicy,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for HS256 signing
    /// * `policy` - Expiration tiers
    pub fn new(secret: &[u8], policy: ExpirationPolicy) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            policy,
        }
    }

    pub fn policy(&self) -> &ExpirationPolicy {
        &self.policy
    }

    /// Sign `payload` into a token expiring after the tier selected by `remember_me`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Payload could not be serialized or signed
    pub fn issue<T: Serialize>(
        &self,
        payload: &T,
        remember_me: bool,
    ) -> Result<IssuedToken, JwtError> {
        // Second precision, so `expires_at` matches the `exp` claim exactly
        let now = Utc::now();
        let issued_at = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
        let lifetime = self.policy.lifetime(remember_me);
        let claims = Claims::new(payload, issued_at, lifetime);

        let token = self.jwt_handler.encode(&claims)?;

        Ok(IssuedToken {
            token,
            issued_at,
            expires_at: issued_at + lifetime,
        })
    }

    /// Verify signature and expiration, returning the decoded claims.
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `InvalidToken` - Signature mismatch or missing claim
    /// * `DecodingFailed` - Malformed token or unexpected payload
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<Claims<T>, JwtError> {
        self.jwt_handler.decode(token)
    }
}
