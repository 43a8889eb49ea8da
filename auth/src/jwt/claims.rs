use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload of a session token.
///
/// Only the account identifier is embedded, never the username, so a token
/// keeps pointing at the same identity even if the handle changes.
///
/// Serialized as `{"user": {"id": ...}, "iat": ..., "exp": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    pub user: SessionUser,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp); absent for non-expiring tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
}

impl SessionClaims {
    /// Claims for `user_id`, issued now.
    ///
    /// # Arguments
    /// * `user_id` - Stable account identifier
    /// * `expiration_hours` - Lifetime of the token; `None` never expires
    pub fn for_user(user_id: impl ToString, expiration_hours: Option<i64>) -> Self {
        let now = Utc::now();

        Self {
            user: SessionUser {
                id: user_id.to_string(),
            },
            iat: Some(now.timestamp()),
            exp: expiration_hours.map(|hours| (now + Duration::hours(hours)).timestamp()),
        }
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user_with_expiration() {
        let claims = SessionClaims::for_user("user123", Some(24));

        assert_eq!(claims.user_id(), "user123");

        let exp = claims.exp.unwrap();
        let iat = claims.iat.unwrap();
        assert_eq!(exp - iat, 24 * 60 * 60);
    }

    #[test]
    fn test_for_user_without_expiration() {
        let claims = SessionClaims::for_user("user123", None);

        assert!(claims.exp.is_none());
        assert!(claims.iat.is_some());
    }

    #[test]
    fn test_payload_shape() {
        let claims = SessionClaims::for_user("8d1c", None);

        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["user"]["id"], "8d1c");
        assert!(json.get("exp").is_none());
        assert!(json.get("username").is_none());
    }

    #[test]
    fn test_with_expiration_overrides_lifetime() {
        let claims = SessionClaims::for_user("user123", None).with_expiration(1000);

        assert_eq!(claims.exp, Some(1000));
        assert_eq!(claims.user_id(), "user123");
    }
}
