use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::Role;

/// Persistence gateway for roles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Stores a role under a fresh id; a taken name is `InvalidRole`
    async fn create(&self, name: String) -> UserResult<Role>;

    async fn update(&self, role: Role) -> UserResult<Role>;

    async fn delete_by_id(&self, id: i32) -> UserResult<bool>;

    async fn find_by_id(&self, id: i32) -> UserResult<Option<Role>>;

    /// Case-insensitive
    async fn find_by_name(&self, name: &str) -> UserResult<Option<Role>>;

    /// Ordered by id
    async fn find_all(&self) -> UserResult<Vec<Role>>;
}

#[derive(Debug, Default)]
struct RoleStore {
    next_id: i32,
    roles: BTreeMap<i32, Role>,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryRoleRepository {
    store: Arc<RwLock<RoleStore>>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled with `member` (1), `staff` (2) and `admin` (3).
    pub fn seeded() -> Self {
        let roles = [(1, "member"), (2, "staff"), (3, "admin")]
            .into_iter()
            .map(|(id, name)| {
                (
                    id,
                    Role {
                        id,
                        name: name.to_string(),
                    },
                )
            })
            .collect();

        Self {
            store: Arc::new(RwLock::new(RoleStore { next_id: 3, roles })),
        }
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn create(&self, name: String) -> UserResult<Role> {
        let mut store = self.store.write().await;
        if store.roles.values().any(|r| r.name.eq_ignore_ascii_case(&name)) {
            return Err(UserError::InvalidRole);
        }

        store.next_id += 1;
        let role = Role {
            id: store.next_id,
            name,
        };
        store.roles.insert(role.id, role.clone());

        tracing::info!(role_id = role.id, name = %role.name, "Created role");
        Ok(role)
    }

    async fn update(&self, role: Role) -> UserResult<Role> {
        let mut store = self.store.write().await;
        if !store.roles.contains_key(&role.id) {
            return Err(UserError::RoleNotFound(role.id));
        }
        if store
            .roles
            .values()
            .any(|r| r.id != role.id && r.name.eq_ignore_ascii_case(&role.name))
        {
            return Err(UserError::InvalidRole);
        }

        store.roles.insert(role.id, role.clone());
        tracing::info!(role_id = role.id, "Updated role");
        Ok(role)
    }

    async fn delete_by_id(&self, id: i32) -> UserResult<bool> {
        Ok(self.store.write().await.roles.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<Role>> {
        Ok(self.store.read().await.roles.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> UserResult<Option<Role>> {
        let store = self.store.read().await;
        Ok(store
            .roles
            .values()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<Role>> {
        Ok(self.store.read().await.roles.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_roles() {
        let repo = InMemoryRoleRepository::seeded();
        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["member", "staff", "admin"]);
    }

    #[tokio::test]
    async fn test_create_continues_after_seed() {
        let repo = InMemoryRoleRepository::seeded();
        let coach = repo.create("coach".to_string()).await.unwrap();
        assert_eq!(coach.id, 4);
    }

    #[tokio::test]
    async fn test_find_by_name_ignores_case() {
        let repo = InMemoryRoleRepository::seeded();
        let admin = repo.find_by_name("ADMIN").await.unwrap().unwrap();
        assert_eq!(admin.id, 3);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_invalid() {
        let repo = InMemoryRoleRepository::seeded();
        assert_eq!(
            repo.create("Member".to_string()).await.unwrap_err(),
            UserError::InvalidRole
        );
    }
}
