use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session JWT claims.
///
/// Carries the subject and its validity window as RFC 7519 registered claims.
/// `sub` and `exp` are mandatory; a token without them never decodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identity)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject valid for `ttl` starting at `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Account identity
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with sub, exp and iat set
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            exp: (issued_at + ttl).timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    /// Expiration as a UTC instant.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// The expiration second itself is already outside the validity window.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_subject() {
        let issued_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_subject("a@x.com", issued_at, Duration::hours(72));

        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 72 * 60 * 60);
        assert_eq!(claims.expires_at(), Some(issued_at + Duration::hours(72)));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "a@x.com".to_string(),
            exp: 1000,
            iat: 0,
        };

        assert!(!claims.is_expired(999)); // Last valid second
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_serialized_field_names() {
        let claims = Claims {
            sub: "a@x.com".to_string(),
            exp: 20,
            iat: 10,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["sub"], "a@x.com");
        assert_eq!(value["exp"], 20);
        assert_eq!(value["iat"], 10);
    }
}
