use serde::Serialize;

use super::email::Email;

/// Role tiers as seeded in the roles table. The authorizer does not assume
/// this is the full set; it asks the store for the live role count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Customer,
    Admin,
}

impl UserRole {
    pub fn role_id(&self) -> i32 {
        match self {
            UserRole::Customer => 1,
            UserRole::Admin => 2,
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: Email,
    pub username: String,
    pub password_hash: String,
    pub role_id: i32,
}

impl User {
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id.clone(),
            email: self.email.as_ref().to_string(),
            username: self.username.clone(),
            role_id: self.role_id,
        }
    }
}

/// Public projection of a user, safe to return to clients.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role_id: i32,
}
