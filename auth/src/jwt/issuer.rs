use chrono::DateTime;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// A freshly signed access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWT
    pub access_token: String,
    /// Expiration time (Unix timestamp)
    pub expires_at: i64,
}

/// Creates signed, time-bounded bearer tokens.
pub struct TokenIssuer {
    handler: JwtHandler,
    validity_minutes: i64,
}

impl TokenIssuer {
    /// Create an issuer from the signing secret and token lifetime.
    pub fn new(secret: &[u8], validity_minutes: i64) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            validity_minutes,
        }
    }

    /// Issue a token valid from now for the configured lifetime.
    ///
    /// # Arguments
    /// * `subject` - Optional user identifier embedded as `sub`
    ///
    /// # Errors
    /// * `SigningFailed` - Token could not be signed, or the expiry falls
    ///   outside the representable date range
    pub fn issue(&self, subject: Option<&str>) -> Result<IssuedToken, JwtError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        subject: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let mut claims = Claims::expiring_in(self.validity_minutes, now).ok_or_else(|| {
            JwtError::SigningFailed(format!(
                "token lifetime of {} minutes is out of range",
                self.validity_minutes
            ))
        })?;
        if let Some(subject) = subject {
            claims = claims.with_subject(subject);
        }

        let access_token = self.handler.encode(&claims)?;

        Ok(IssuedToken {
            access_token,
            // expiring_in always sets exp
            expires_at: claims.exp.unwrap_or_default(),
        })
    }
}
