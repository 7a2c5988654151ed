//! User domain types.
//!
//! Users are synthesized per request - registration fabricates a record and
//! returns it without storing anything, and login always resolves to the
//! demo identity. There is no user table behind these types yet.

use chrono::{DateTime, Utc};
use serde::Serialize;

use toolshed_core::{Email, UserId};

/// A user record as fabricated by the auth service.
///
/// Carries the password hash; never serialize this type in a response body.
#[derive(Debug, Clone)]
pub struct User {
    /// Timestamp-derived id (e.g., `user-1722945600000`).
    pub id: UserId,
    /// The user's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Argon2 hash of the submitted password.
    pub password_hash: String,
    /// When the record was fabricated.
    pub created_at: DateTime<Utc>,
}

/// The client-safe projection of a [`User`] (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_omits_password_hash() {
        let user = User {
            id: UserId::new("user-1722945600000"),
            email: Email::parse("customer@toolshed.example").unwrap(),
            name: "Customer".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            created_at: Utc::now(),
        };

        let profile = UserProfile::from(&user);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("customer@toolshed.example"));
        assert!(!json.contains("argon2id"));
    }
}
