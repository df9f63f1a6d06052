use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Locally known user; there is no backend account behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl User {
    /// Fresh user with a random id
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Login path: the username is the local part of the email
    pub fn from_email(email: &str) -> Self {
        let email = email.trim();
        let username = email.split('@').next().unwrap_or(email);
        Self::new(username, email)
    }
}
