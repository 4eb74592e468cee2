use chrono::DateTime;
use chrono::TimeDelta;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// JWT claims carried by access tokens.
///
/// Only `exp` is required for a token to verify. `sub` carries the user
/// identifier when the issuer knows it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims expiring `validity_minutes` after `now`.
    ///
    /// # Returns
    /// Claims with exp and iat set, or `None` when the expiry is not a
    /// representable date
    pub fn expiring_in(validity_minutes: i64, now: DateTime<Utc>) -> Option<Self> {
        let expiration = TimeDelta::try_minutes(validity_minutes)
            .and_then(|validity| now.checked_add_signed(validity))?;

        Some(Self {
            sub: None,
            exp: Some(expiration.timestamp()),
            iat: Some(now.timestamp()),
        })
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Check if token is expired.
    ///
    /// A token is still usable at the exact second of its expiry.
    /// Claims without `exp` are never considered expired here; the
    /// verifier rejects them before this check is reached.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| current_timestamp > exp)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new().with_subject("user123");
        assert_eq!(claims.sub, Some("user123".to_string()));
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_expiring_in() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = Claims::expiring_in(30, now).unwrap();

        assert_eq!(claims.iat, Some(now.timestamp()));
        assert_eq!(claims.exp, Some(now.timestamp() + 30 * 60));
        assert!(claims.sub.is_none());
    }

    #[test]
    fn test_expiring_in_out_of_range() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        // Past the latest representable date
        assert!(Claims::expiring_in(1_000_000_000_000, now).is_none());
        // Larger than a TimeDelta can hold
        assert!(Claims::expiring_in(i64::MAX, now).is_none());
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::new().with_expiration(1000);

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let claims = Claims::new().with_expiration(1000);
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json, serde_json::json!({ "exp": 1000 }));
    }
}
