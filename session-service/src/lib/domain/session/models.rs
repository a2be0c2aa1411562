use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::session::errors::UsernameError;

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login identifier as submitted by the client.
///
/// Matched verbatim against the stored email column. Only emptiness is
/// rejected, so records stored in any shape stay reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Create a new username.
    ///
    /// # Errors
    /// * `Empty` - Value is the empty string
    pub fn new(value: String) -> Result<Self, UsernameError> {
        if value.is_empty() {
            return Err(UsernameError::Empty);
        }

        Ok(Username(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Persisted login identity.
///
/// Owned by the scheduling application; this service only reads it.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub firstname: Option<String>,
    pub name: Option<String>,
}

/// Snapshot of a credential record embedded in a session token.
///
/// Has no password field: the hash cannot leak into a token or a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub email: String,
    pub role: String,
    pub firstname: Option<String>,
    pub name: Option<String>,
}

impl From<&CredentialRecord> for SessionUser {
    fn from(record: &CredentialRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            role: record.role.clone(),
            firstname: record.firstname.clone(),
            name: record.name.clone(),
        }
    }
}

/// Command to open a session
#[derive(Debug)]
pub struct LoginCommand {
    pub username: Username,
    pub password: String,
    pub remember_me: bool,
}

impl LoginCommand {
    /// Construct a new login command.
    ///
    /// # Arguments
    /// * `username` - Identifier looked up in the credential store
    /// * `password` - Plain text password (verified by service)
    /// * `remember_me` - Request the extended token lifetime
    pub fn new(username: Username, password: String, remember_me: bool) -> Self {
        Self {
            username,
            password,
            remember_me,
        }
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
