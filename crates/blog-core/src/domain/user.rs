use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum username length in characters.
pub const USERNAME_MAX_LEN: usize = 150;

/// User entity - the author a post belongs to.
///
/// Identity is owned by the identity subsystem; posts only reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Result<Self, DomainError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(DomainError::empty("username"));
        }
        let len = username.chars().count();
        if len > USERNAME_MAX_LEN {
            return Err(DomainError::too_long("username", USERNAME_MAX_LEN, len));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            username,
            email: email.into(),
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("alice", "alice@example.com").unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_username_validation() {
        assert!(User::new("", "a@example.com").is_err());
        assert!(User::new("u".repeat(USERNAME_MAX_LEN + 1), "a@example.com").is_err());
    }
}
