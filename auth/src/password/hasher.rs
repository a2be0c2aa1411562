use argon2::password_hash;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordVerifier;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// New hashes are produced with bcrypt, the format already stored in the
/// credential table. Verification accepts both bcrypt (`$2a$`, `$2b$`, `$2y$`)
/// and Argon2 PHC strings.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Cost used when none is configured.
    pub const DEFAULT_COST: u32 = 10;

    /// Create a new password hasher with the default bcrypt cost.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }

    /// Create a password hasher with an explicit bcrypt cost.
    ///
    /// # Arguments
    /// * `cost` - bcrypt work factor (4 to 31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Configured bcrypt cost.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password securely.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt format bcrypt hash (includes version, cost, and salt)
    ///
    /// # Errors
    /// * `HashingFailed` - Cost out of range or hashing failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash (bcrypt or Argon2 PHC string)
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `UnsupportedScheme` - Hash is neither bcrypt nor Argon2
    /// * `VerificationFailed` - Hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        if is_bcrypt(hash) {
            bcrypt::verify(password, hash).map_err(|e| {
                PasswordError::VerificationFailed(format!("Invalid bcrypt hash: {}", e))
            })
        } else if hash.starts_with("$argon2") {
            let parsed_hash = PasswordHash::new(hash).map_err(|e| {
                PasswordError::VerificationFailed(format!("Invalid argon2 hash: {}", e))
            })?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => Err(PasswordError::VerificationFailed(format!(
                    "Invalid argon2 hash: {}",
                    e
                ))),
            }
        } else {
            Err(PasswordError::UnsupportedScheme)
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn is_bcrypt(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}
