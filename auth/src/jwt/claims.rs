use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// The service-defined payload is flattened next to the registered
/// `iat` and `exp` claims, so a token for `{ "id": 1, "email": "…" }`
/// carries `{ "id": 1, "email": "…", "iat": …, "exp": … }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims<T> {
    #[serde(flatten)]
    pub payload: T,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl<T> Claims<T> {
    /// Create claims issued at `issued_at` and valid for `lifetime`.
    ///
    /// # Arguments
    /// * `payload` - Service-defined token payload
    /// * `issued_at` - Issuance instant
    /// * `lifetime` - Offset from issuance to expiration
    pub fn new(payload: T, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            payload,
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
        }
    }

    /// Lifetime encoded in the token, in seconds.
    pub fn lifetime_seconds(&self) -> i64 {
        self.exp - self.iat
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
