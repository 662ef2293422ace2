use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{require_text, Record, ValidationError};

/// A staff member. Login credentials live in `accounts`, so deleting and
/// re-creating a user never touches anyone's ability to sign in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    #[serde(default)]
    pub user_id: i32,
    pub full_name: String,
    #[serde(default)]
    pub name_with_initials: String,
    #[serde(default)]
    pub nic: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub username: String,
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn key(&self) -> i32 {
        self.user_id
    }

    fn label(&self) -> String {
        self.full_name.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("full_name", &self.full_name, "Full name is required")?;
        require_text("username", &self.username, "Username is required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            full_name: "Nimal Perera".to_string(),
            name_with_initials: "N. Perera".to_string(),
            username: "nimal".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn password_input_is_not_kept() {
        let payload = serde_json::json!({
            "full_name": "Nimal Perera",
            "username": "nimal",
            "password": "secret",
            "password_hash": "x"
        });
        let parsed: User = serde_json::from_value(payload).unwrap();
        let json = serde_json::to_value(&parsed).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn name_and_username_are_required() {
        assert!(user().validate().is_ok());

        let mut u = user();
        u.username = " ".to_string();
        assert_eq!(u.validate().unwrap_err().message, "Username is required");

        let mut u = user();
        u.full_name.clear();
        assert_eq!(u.validate().unwrap_err().field, "full_name");
    }
}
