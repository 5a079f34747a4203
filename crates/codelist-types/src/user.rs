//! Uploading user account type.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::UserId;

/// A user account that datasets are attributed to.
///
/// Exactly one user must exist before any dataset can be created. When the
/// store is empty, the loader synthesizes one via [`User::placeholder`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Unique identifier for this user.
    pub id: UserId,
    /// Login email address.
    pub email: String,
    /// Hashed login credential.
    pub password_hash: String,
    /// Account role.
    pub role: String,
    /// When this account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Email of the synthesized default user.
    pub const PLACEHOLDER_EMAIL: &'static str = "default@user.com";
    /// Password hash of the synthesized default user.
    pub const PLACEHOLDER_PASSWORD_HASH: &'static str = "hashed_password";
    /// Role of the synthesized default user.
    pub const PLACEHOLDER_ROLE: &'static str = "admin";

    /// Synthesizes the default uploading user with fixed placeholder
    /// credentials and a fresh identifier.
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4(),
            email: Self::PLACEHOLDER_EMAIL.to_string(),
            password_hash: Self::PLACEHOLDER_PASSWORD_HASH.to_string(),
            role: Self::PLACEHOLDER_ROLE.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_user_fields() {
        let user = User::placeholder();
        assert_eq!(user.email, "default@user.com");
        assert_eq!(user.password_hash, "hashed_password");
        assert_eq!(user.role, "admin");
    }

    #[test]
    fn test_placeholder_users_get_distinct_ids() {
        let a = User::placeholder();
        let b = User::placeholder();
        assert_ne!(a.id, b.id);
    }
}
