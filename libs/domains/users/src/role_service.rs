use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::Role;
use crate::role_repository::RoleRepository;

/// Role ids that authorization decisions depend on.
///
/// Resolved once at startup by name (see [`RoleService::resolve_policy`]) and
/// handed to every router that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePolicy {
    pub member_role_id: i32,
    pub admin_role_id: i32,
}

impl RolePolicy {
    pub fn new(member_role_id: i32, admin_role_id: i32) -> Self {
        Self {
            member_role_id,
            admin_role_id,
        }
    }

    pub fn is_admin(&self, role_id: i32) -> bool {
        role_id == self.admin_role_id
    }
}

impl Default for RolePolicy {
    /// Ids of the seeded `member` and `admin` roles
    fn default() -> Self {
        Self::new(1, 3)
    }
}

#[derive(Clone)]
pub struct RoleService<R: RoleRepository> {
    repository: Arc<R>,
}

impl<R: RoleRepository> RoleService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn find_role_by_id(&self, id: i32) -> UserResult<Option<Role>> {
        self.repository.find_by_id(id).await
    }

    pub async fn find_all_roles(&self) -> UserResult<Vec<Role>> {
        self.repository.find_all().await
    }

    pub async fn create_role(&self, name: &str) -> UserResult<Role> {
        let name = Self::role_name(name)?;
        self.repository.create(name).await
    }

    pub async fn update_role(&self, id: i32, name: &str) -> UserResult<Role> {
        let name = Self::role_name(name)?;
        self.repository.update(Role { id, name }).await
    }

    pub async fn delete_role_by_id(&self, id: i32) -> UserResult<()> {
        if self.repository.delete_by_id(id).await? {
            tracing::info!(role_id = id, "Deleted role");
            Ok(())
        } else {
            Err(UserError::RoleNotFound(id))
        }
    }

    /// Looks both roles up by name (case-insensitive).
    pub async fn resolve_policy(
        &self,
        member_name: &str,
        admin_name: &str,
    ) -> UserResult<RolePolicy> {
        let member = self.role_by_name(member_name).await?;
        let admin = self.role_by_name(admin_name).await?;

        tracing::info!(
            member_role_id = member.id,
            admin_role_id = admin.id,
            "Resolved role policy"
        );
        Ok(RolePolicy::new(member.id, admin.id))
    }

    async fn role_by_name(&self, name: &str) -> UserResult<Role> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| UserError::Internal(format!("role '{}' does not exist", name)))
    }

    fn role_name(raw: &str) -> UserResult<String> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(UserError::InvalidRole);
        }
        Ok(name.to_string())
    }
}
