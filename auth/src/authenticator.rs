use crate::jwt::Claims;
use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password hashing and token handling.
///
/// Holds no mutable state; the signing secret is injected once at
/// construction and shared read-only by the issuer and verifier.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    placeholder_hash: Option<String>,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
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
    /// * `jwt_secret` - Secret key for token signing and verification
    /// * `validity_minutes` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], validity_minutes: i64) -> Self {
        Self::with_password_hasher(jwt_secret, validity_minutes, PasswordHasher::new())
    }

    /// Create an authenticator with a custom-cost password hasher.
    pub fn with_password_hasher(
        jwt_secret: &[u8],
        validity_minutes: i64,
        password_hasher: PasswordHasher,
    ) -> Self {
        let placeholder_hash = password_hasher.hash("placeholder-password").ok();

        Self {
            password_hasher,
            placeholder_hash,
            token_issuer: TokenIssuer::new(jwt_secret, validity_minutes),
            token_verifier: TokenVerifier::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Reject a login for an account that does not exist.
    ///
    /// Runs one verification against a placeholder hash of the same cost,
    /// so the caller spends as long as it would on a wrong password.
    pub fn reject_unknown_user(&self, password: &str) -> AuthenticationError {
        if let Some(placeholder_hash) = &self.placeholder_hash {
            let _ = self.password_hasher.verify(password, placeholder_hash);
        }

        AuthenticationError::InvalidCredentials
    }

    /// Verify credentials and issue a token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier embedded as the token subject
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue(Some(subject))?)
    }

    /// Issue a token without password verification.
    ///
    /// Used right after signup, where the caller has just chosen the password.
    pub fn issue_token(&self, subject: Option<&str>) -> Result<IssuedToken, JwtError> {
        self.token_issuer.issue(subject)
    }

    /// Verify a raw `Authorization` header value.
    pub fn verify_header(&self, header: &str) -> Result<Claims, JwtError> {
        self.token_verifier.verify(header)
    }

    /// Report whether the presented header carries a currently usable token.
    pub fn check_token(&self, header: &str) -> Result<bool, JwtError> {
        self.token_verifier.check_token(header)
    }
}
