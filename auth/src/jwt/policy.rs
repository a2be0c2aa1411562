use chrono::Duration;

/// Two-tier token expiration.
///
/// `standard` applies to a regular login, `extended` when the caller asked
/// for a persistent ("remember me") session. Expiration is fixed at
/// issuance: no sliding window, no refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationPolicy {
    pub standard: Duration,
    pub extended: Duration,
}

impl ExpirationPolicy {
    pub fn new(standard: Duration, extended: Duration) -> Self {
        Self { standard, extended }
    }

    /// Select the token lifetime for a login.
    pub fn lifetime(&self, remember_me: bool) -> Duration {
        if remember_me {
            self.extended
        } else {
            self.standard
        }
    }
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        Self {
            standard: Duration::hours(1),
            extended: Duration::days(30),
        }
    }
}
