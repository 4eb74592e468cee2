//! Authentication utilities library
//!
//! Provides the authentication core used by the inventory service:
//! - Password hashing (Argon2id, tunable cost)
//! - Token issuance (HS256 JWT with an `exp` claim)
//! - Token verification from `Authorization: Bearer <token>` headers
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenIssuer, TokenVerifier};
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let issuer = TokenIssuer::new(secret, 60);
//! let verifier = TokenVerifier::new(secret);
//!
//! let issued = issuer.issue(Some("user123")).unwrap();
//! let claims = verifier
//!     .verify(&format!("Bearer {}", issued.access_token))
//!     .unwrap();
//! assert_eq!(claims.exp, Some(issued.expires_at));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 60);
//!
//! // Signup: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let issued = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Protected request: check the presented header
//! let header = format!("Bearer {}", issued.access_token);
//! assert!(auth.check_token(&header).unwrap());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
