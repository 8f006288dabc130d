use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// An identity known to the service. Usernames are unique and act as the lookup key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// bcrypt hash of the user's password. Never serialized.
    #[serde(skip)]
    pub password_hash: String,
}

/// Payload for registering a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct UserInput {
    /// Must be between 3 and 32 characters, alphanumeric, and can include underscores or hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    pub full_name: Option<String>,
    /// Must be a valid email format when present.
    #[validate(email)]
    pub email: Option<String>,
    /// Must be at least 6 characters long. Only its hash is ever stored.
    #[validate(length(min = 6))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn input(username: &str, email: Option<&str>, password: &str) -> UserInput {
        UserInput {
            username: username.to_string(),
            full_name: None,
            email: email.map(str::to_string),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_user_input_validation() {
        assert!(input("test_user-123", Some("test@example.com"), "password123")
            .validate()
            .is_ok());
        assert!(input("testuser", None, "password123").validate().is_ok());

        // Invalid email
        assert!(input("testuser", Some("invalid-email"), "password123")
            .validate()
            .is_err());

        // Short password
        assert!(input("testuser", None, "short").validate().is_err());

        // Username with space and exclamation
        assert!(input("test user!", None, "password123").validate().is_err());

        // Username too short
        assert!(input("tu", None, "password123").validate().is_err());
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            full_name: Some("Administrator".to_string()),
            email: Some("admin@example.com".to_string()),
            password_hash: "$2b$12$secret".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "admin");
        assert!(json.get("password_hash").is_none());
    }
}
