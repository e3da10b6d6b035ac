//! Account records returned by the backend.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable;

/// User profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Profile {
    #[serde(deserialize_with = "nullable::or_default")]
    pub id: u64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub email: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub username: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub display_name: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub avatar: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub balance: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub vip_level: i32,
    pub vip_expire_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub email_verified: bool,
}

/// Balance and VIP summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Balance {
    #[serde(deserialize_with = "nullable::or_default")]
    pub balance: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub vip_level: i32,
    #[serde(deserialize_with = "nullable::or_default")]
    pub vip_name: String,
    pub vip_expire_at: Option<DateTime<Utc>>,
}

/// Result of exchanging a static API key for a bearer token.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct TokenGrant {
    #[serde(deserialize_with = "nullable::or_default")]
    pub access_token: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub token_type: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub expires_in: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub user_id: u64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub username: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub email: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub display_name: String,
}

impl fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGrant")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// User summary attached to a login or registration result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct SessionUser {
    #[serde(deserialize_with = "nullable::or_default")]
    pub id: u64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub username: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub email: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub display_name: String,
}

/// Payload of a successful login or registration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct SessionGrant {
    #[serde(deserialize_with = "nullable::or_default")]
    pub token: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub user: SessionUser,
}

impl fmt::Debug for SessionGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGrant")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_tolerates_missing_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{"id":42,"username":"u","created_at":"2025-01-02T03:04:05Z","vip_expire_at":null}"#,
        )
        .unwrap();

        assert_eq!(profile.id, 42);
        assert_eq!(profile.username, "u");
        assert!(profile.vip_expire_at.is_none());
        assert_eq!(profile.created_at.to_rfc3339(), "2025-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_profile_null_fields_decode_as_empty() {
        let profile: Profile = serde_json::from_str(
            r#"{"id":1,"email":"a@b.c","avatar":null,"display_name":null,"balance":null,"created_at":null}"#,
        )
        .unwrap();

        assert_eq!(profile.id, 1);
        assert_eq!(profile.email, "a@b.c");
        assert_eq!(profile.avatar, "");
        assert_eq!(profile.display_name, "");
        assert_eq!(profile.created_at, DateTime::<Utc>::default());
    }

    #[test]
    fn test_profile_wrong_type_still_rejected() {
        assert!(serde_json::from_str::<Profile>(r#"{"avatar":7}"#).is_err());
    }

    #[test]
    fn test_token_grant_debug_hides_token() {
        let grant = TokenGrant {
            access_token: "abc123-secret".to_string(),
            ..TokenGrant::default()
        };

        assert!(!format!("{grant:?}").contains("abc123-secret"));
    }

    #[test]
    fn test_session_grant_from_login_payload() {
        let grant: SessionGrant =
            serde_json::from_str(r#"{"token":"tok1","user":{"id":42,"username":"u"}}"#).unwrap();

        assert_eq!(grant.token, "tok1");
        assert_eq!(grant.user.id, 42);
        assert!(!format!("{grant:?}").contains("tok1"));
    }

    #[test]
    fn test_session_grant_null_user_fields() {
        let grant: SessionGrant = serde_json::from_str(
            r#"{"token":"tok1","user":{"id":42,"username":"u","email":null,"display_name":null}}"#,
        )
        .unwrap();

        assert_eq!(grant.token, "tok1");
        assert_eq!(grant.user.id, 42);
        assert!(grant.user.display_name.is_empty());
    }
}
