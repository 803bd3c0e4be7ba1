//! Authenticated user record.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// The user record returned by the authentication backend.
///
/// The `is_staff_member` and `is_pharmacist` flags drive role derivation;
/// everything else is display data. Roles are never stored, only computed
/// from these flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// User ID.
    pub id: UserId,
    /// Login username.
    pub username: String,
    /// User email.
    pub email: String,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Whether the user is a staff member (maps to the admin role).
    #[serde(default)]
    pub is_staff_member: bool,
    /// Whether the user is a licensed pharmacist.
    #[serde(default)]
    pub is_pharmacist: bool,
    /// Whether the account is active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl UserAccount {
    /// Returns the user's full name, falling back to the username when the
    /// name fields are empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> UserAccount {
        UserAccount {
            id: UserId::new(),
            username: "mina".to_string(),
            email: "mina@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_staff_member: false,
            is_pharmacist: false,
            is_active: true,
        }
    }

    #[test]
    fn test_full_name_falls_back_to_username() {
        assert_eq!(account().full_name(), "mina");
    }

    #[test]
    fn test_full_name_joins_parts() {
        let mut user = account();
        user.first_name = "Mina".to_string();
        user.last_name = "Rahimi".to_string();
        assert_eq!(user.full_name(), "Mina Rahimi");
    }

    #[test]
    fn test_deserialize_defaults_flags_to_false() {
        let user: UserAccount = serde_json::from_str(
            r#"{"id":"018f0e7a-9c3b-7d50-b4a2-111111111111","username":"mina","email":"mina@example.com"}"#,
        )
        .unwrap();
        assert!(!user.is_staff_member);
        assert!(!user.is_pharmacist);
        assert!(user.is_active);
    }
}
