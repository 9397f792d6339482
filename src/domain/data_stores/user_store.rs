use crate::domain::{Email, User};

#[derive(Debug, PartialEq)]
pub enum UserStoreError {
    UserAlreadyExists,
    UserNotFound,
    Timeout,
    UnexpectedError,
}

pub struct NewUser {
    pub email: Email,
    pub username: String,
    pub password_hash: String,
    pub role_id: i32,
}

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Returns the generated user id.
    async fn insert(&self, new_user: NewUser) -> Result<String, UserStoreError>;

    /// Single lookup covering both identifying fields; sign-in accepts either.
    async fn find_by_email_or_username(&self, ident: &str) -> Result<User, UserStoreError>;

    async fn find_by_id(&self, id: &str) -> Result<User, UserStoreError>;

    /// Live role cardinality; the authorizer sizes its bitmask off this.
    async fn count_distinct_roles(&self) -> Result<usize, UserStoreError>;
}
