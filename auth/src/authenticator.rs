use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::jwt::Claims;
use crate::jwt::ExpirationPolicy;
use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    /// Hash verified when no credential exists, so both rejection paths do the same work.
    decoy_hash: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `policy` - Token expiration tiers
    /// * `password_hasher` - Hasher whose cost matches the stored credentials
    ///
    /// # Errors
    /// * `HashingFailed` - The decoy hash could not be produced (cost out of range)
    pub fn new(
        jwt_secret: &[u8],
        policy: ExpirationPolicy,
        password_hasher: PasswordHasher,
    ) -> Result<Self, PasswordError> {
        let decoy_hash = password_hasher.hash("decoy-password-never-matches")?;

        Ok(Self {
            password_hasher,
            token_issuer: TokenIssuer::new(jwt_secret, policy),
            decoy_hash,
        })
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `payload` - Token payload
    /// * `remember_me` - Select the extended expiration tier
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        payload: &T,
        remember_me: bool,
    ) -> Result<IssuedToken, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue(payload, remember_me)?)
    }

    /// Reject a login for which no credential exists.
    ///
    /// Runs a verification against the decoy hash before returning
    /// `InvalidCredentials`, matching the cost of a wrong-password rejection.
    pub fn reject(&self, password: &str) -> AuthenticationError {
        if let Err(e) = self.password_hasher.verify(password, &self.decoy_hash) {
            tracing::debug!(error = %e, "Decoy password verification failed");
        }

        AuthenticationError::InvalidCredentials
    }

    /// Validate and decode a session token.
    pub fn validate_token<T: DeserializeOwned>(&self, token: &str) -> Result<Claims<T>, JwtError> {
        self.token_issuer.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Payload {
        id: i64,
        role: String,
    }

    fn authenticator() -> Authenticator {
        Authenticator::new(
            b"test_secret_key_at_least_32_bytes!",
            ExpirationPolicy::default(),
            PasswordHasher::with_cost(4),
        )
        .expect("Failed to build authenticator")
    }

    fn payload() -> Payload {
        Payload {
            id: 42,
            role: "teacher".to_string(),
        }
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let issued = authenticator
            .authenticate(password, &hash, &payload(), false)
            .expect("Authentication failed");

        assert!(!issued.token.is_empty());

        let decoded: Claims<Payload> = authenticator
            .validate_token(&issued.token)
            .expect("Token validation failed");
        assert_eq!(decoded.payload, payload());
        assert_eq!(decoded.lifetime_seconds(), 3600);
    }

    #[test]
    fn test_authenticate_remember_me() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("my_password").unwrap();

        let issued = authenticator
            .authenticate("my_password", &hash, &payload(), true)
            .expect("Authentication failed");

        let decoded: Claims<Payload> = authenticator.validate_token(&issued.token).unwrap();
        assert_eq!(decoded.lifetime_seconds(), 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, &payload(), false);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("my_password", "not-a-hash", &payload(), false);
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(_))
        ));
    }

    #[test]
    fn test_reject_returns_invalid_credentials() {
        let authenticator = authenticator();

        assert!(matches!(
            authenticator.reject("anything"),
            AuthenticationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_new_with_invalid_cost() {
        let result = Authenticator::new(
            b"test_secret_key_at_least_32_bytes!",
            ExpirationPolicy::default(),
            PasswordHasher::with_cost(99),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        let result = authenticator.validate_token::<Payload>("invalid.token.here");
        assert!(result.is_err());
    }
}
