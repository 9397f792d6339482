use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{NewUser, User, UserStore, UserStoreError};

/// In-memory user store, interchangeable with the SQL store in tests.
pub struct HashmapUserStore {
    users: RwLock<HashMap<String, User>>,
    roles: RwLock<Vec<i32>>,
}

impl Default for HashmapUserStore {
    fn default() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            // Mirrors the seeded roles table: customer, admin.
            roles: RwLock::new(vec![1, 2]),
        }
    }
}

impl HashmapUserStore {
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn set_role(&self, user_id: &str, role_id: i32) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(user_id).ok_or(UserStoreError::UserNotFound)?;
        user.role_id = role_id;
        Ok(())
    }

    pub async fn add_known_role(&self, role_id: i32) {
        let mut roles = self.roles.write().await;
        if !roles.contains(&role_id) {
            roles.push(role_id);
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<String, UserStoreError> {
        let mut users = self.users.write().await;
        let taken = users
            .values()
            .any(|u| u.email == new_user.email || u.username == new_user.username);
        if taken {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let id = Uuid::new_v4().to_string();
        users.insert(
            id.clone(),
            User {
                id: id.clone(),
                email: new_user.email,
                username: new_user.username,
                password_hash: new_user.password_hash,
                role_id: new_user.role_id,
            },
        );
        Ok(id)
    }

    async fn find_by_email_or_username(&self, ident: &str) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email.as_ref() == ident || u.username == ident)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_id(&self, id: &str) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn count_distinct_roles(&self) -> Result<usize, UserStoreError> {
        Ok(self.roles.read().await.len())
    }
}
