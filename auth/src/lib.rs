//! Authentication utilities library
//!
//! Provides the credential and session primitives used by the services:
//! - Password verification (bcrypt, Argon2) and bcrypt hashing
//! - Two-tier session token issuance and validation (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(4);
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Claims, ExpirationPolicy, TokenIssuer};
//! use std::collections::HashMap;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", ExpirationPolicy::default());
//! let payload = HashMap::from([("email", "a@b.com")]);
//! let issued = issuer.issue(&payload, true).unwrap();
//! let claims: Claims<HashMap<String, String>> = issuer.verify(&issued.token).unwrap();
//! assert_eq!(claims.lifetime_seconds(), 30 * 24 * 60 * 60);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, ExpirationPolicy, PasswordHasher};
//! use std::collections::HashMap;
//!
//! let auth = Authenticator::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     ExpirationPolicy::default(),
//!     PasswordHasher::with_cost(4),
//! )
//! .unwrap();
//!
//! let hash = auth.hash_password("password123").unwrap();
//!
//! let payload = HashMap::from([("email", "a@b.com")]);
//! let issued = auth.authenticate("password123", &hash, &payload, false).unwrap();
//! println!("Token: {}", issued.token);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::ExpirationPolicy;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
