use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Persistence gateway for users.
///
/// Mechanical storage only: no format validation happens here. Email lookups
/// are exact (case-sensitive), matching the unique index.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user; the input `id` is ignored and a fresh one assigned
    async fn create(&self, user: User) -> UserResult<User>;

    /// Replaces every column of an existing user
    async fn update(&self, user: User) -> UserResult<User>;

    /// Returns whether a row was removed
    async fn delete_by_id(&self, id: i32) -> UserResult<bool>;

    /// Returns whether a row was removed
    async fn delete_by_email(&self, email: &str) -> UserResult<bool>;

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// All users ordered by id
    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn exists_by_email(&self, email: &str) -> UserResult<bool>;
}

#[derive(Debug, Default)]
struct UserStore {
    next_id: i32,
    users: BTreeMap<i32, User>,
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        if store.users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists);
        }

        store.next_id += 1;
        user.id = store.next_id;
        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        if !store.users.contains_key(&user.id) {
            return Err(UserError::UserNotFound(user.id));
        }
        if store
            .users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists);
        }

        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Updated user");
        Ok(user)
    }

    async fn delete_by_id(&self, id: i32) -> UserResult<bool> {
        let removed = self.store.write().await.users.remove(&id).is_some();
        if removed {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(removed)
    }

    async fn delete_by_email(&self, email: &str) -> UserResult<bool> {
        let mut store = self.store.write().await;
        let id = store
            .users
            .values()
            .find(|u| u.email == email)
            .map(|u| u.id);

        match id {
            Some(id) => {
                store.users.remove(&id);
                tracing::info!(user_id = id, "Deleted user by email");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        Ok(self.store.read().await.users.values().cloned().collect())
    }

    async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        let store = self.store.read().await;
        Ok(store.users.values().any(|u| u.email == email))
    }
}
