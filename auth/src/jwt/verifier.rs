use chrono::Utc;

use super::bearer::extract_bearer_token;
use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Validates signature and expiry of presented bearer tokens.
pub struct TokenVerifier {
    handler: JwtHandler,
}

impl TokenVerifier {
    /// Create a verifier using the same secret the issuer signs with.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            handler: JwtHandler::new(secret),
        }
    }

    /// Verify a raw `Authorization` header value at the current time.
    ///
    /// # Returns
    /// Claims of a correctly signed, unexpired token
    ///
    /// # Errors
    /// * `MalformedHeader` - Header is not `Bearer <token>`
    /// * `InvalidToken` - Bad signature, unparseable token, missing or non-numeric `exp`
    /// * `TokenExpired` - Current time is past `exp`
    pub fn verify(&self, header: &str) -> Result<Claims, JwtError> {
        self.verify_at(header, Utc::now().timestamp())
    }

    /// Verify a raw `Authorization` header value as of `now` (Unix timestamp).
    pub fn verify_at(&self, header: &str, now: i64) -> Result<Claims, JwtError> {
        let token = extract_bearer_token(header)?;
        self.verify_token_at(token, now)
    }

    /// Verify a bare token (no scheme prefix) as of `now`.
    pub fn verify_token_at(&self, token: &str, now: i64) -> Result<Claims, JwtError> {
        let claims: Claims = self.handler.decode(token)?;

        if claims.exp.is_none() {
            return Err(JwtError::InvalidToken("missing 'exp' claim".to_string()));
        }

        if claims.is_expired(now) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }

    /// Report whether the presented token is currently usable.
    ///
    /// Expiry is reported as `Ok(false)`; every other verification
    /// failure is propagated.
    pub fn check_token(&self, header: &str) -> Result<bool, JwtError> {
        self.check_token_at(header, Utc::now().timestamp())
    }

    pub fn check_token_at(&self, header: &str, now: i64) -> Result<bool, JwtError> {
        match self.verify_at(header, now) {
            Ok(_) => Ok(true),
            Err(JwtError::TokenExpired) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde::Serialize;

    use super::*;
    use crate::jwt::TokenIssuer;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    #[test]
    fn test_valid_token_immediately_after_issue() {
        let issuer = TokenIssuer::new(SECRET, 30);
        let verifier = TokenVerifier::new(SECRET);

        let issued = issuer.issue(Some("user123")).unwrap();
        let claims = verifier
            .verify(&bearer(&issued.access_token))
            .expect("Token should verify");

        assert_eq!(claims.sub, Some("user123".to_string()));
        assert_eq!(claims.exp, Some(issued.expires_at));
    }

    #[test]
    fn test_expires_after_validity_window() {
        let issuer = TokenIssuer::new(SECRET, 30);
        let verifier = TokenVerifier::new(SECRET);

        let issued_at = Utc::now();
        let issued = issuer.issue_at(None, issued_at).unwrap();
        let header = bearer(&issued.access_token);

        let at_expiry = (issued_at + Duration::minutes(30)).timestamp();
        assert!(verifier.verify_at(&header, at_expiry).is_ok());

        let after_expiry = (issued_at + Duration::minutes(31)).timestamp();
        assert_eq!(
            verifier.verify_at(&header, after_expiry),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuer = TokenIssuer::new(b"secret_a_at_least_32_bytes_long_key!", 30);
        let verifier = TokenVerifier::new(b"secret_b_at_least_32_bytes_long_key!");

        let issued = issuer.issue(None).unwrap();
        let result = verifier.verify(&bearer(&issued.access_token));

        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_garbage_token_with_bearer_prefix_is_invalid() {
        let verifier = TokenVerifier::new(SECRET);

        let result = verifier.verify("Bearer abc.def.ghi");
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_token_without_prefix_is_malformed() {
        let verifier = TokenVerifier::new(SECRET);

        let result = verifier.verify("abc.def.ghi");
        assert!(matches!(result, Err(JwtError::MalformedHeader(_))));
    }

    #[test]
    fn test_token_without_exp_is_invalid() {
        let verifier = TokenVerifier::new(SECRET);
        let token = JwtHandler::new(SECRET)
            .encode(&Claims::new().with_subject("user123"))
            .unwrap();

        let result = verifier.verify(&bearer(&token));
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_token_with_non_numeric_exp_is_invalid() {
        #[derive(Serialize)]
        struct StringExp {
            exp: String,
        }

        let verifier = TokenVerifier::new(SECRET);
        let token = JwtHandler::new(SECRET)
            .encode(&StringExp {
                exp: "tomorrow".to_string(),
            })
            .unwrap();

        let result = verifier.verify(&bearer(&token));
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_check_token() {
        let issuer = TokenIssuer::new(SECRET, 5);
        let verifier = TokenVerifier::new(SECRET);

        let issued_at = Utc::now();
        let header = bearer(&issuer.issue_at(None, issued_at).unwrap().access_token);

        assert_eq!(
            verifier.check_token_at(&header, issued_at.timestamp()),
            Ok(true)
        );
        assert_eq!(
            verifier.check_token_at(&header, (issued_at + Duration::minutes(6)).timestamp()),
            Ok(false)
        );
        assert!(matches!(
            verifier.check_token_at("Bearer abc.def.ghi", issued_at.timestamp()),
            Err(JwtError::InvalidToken(_))
        ));
        assert!(matches!(
            verifier.check_token_at("nonsense", issued_at.timestamp()),
            Err(JwtError::MalformedHeader(_))
        ));
    }
}
