use std::sync::Arc;

use crate::entities::{NewRole, Role, RoleChanges, RoleFilter, UserRole, UserRoleFilter};
use crate::errors_service::{from_repository, ServiceError};
use crate::repository::traits::{RoleRepositoryTrait, UserRoleRepositoryTrait};
use crate::repository::{RoleRepository, UserRoleRepository};
use crate::validation::{normalize_optional_text, validate_name};

pub const USER_ID_REQUIRED: &str = "user_id query parameter is required";
pub const USER_ID_NOT_INTEGER: &str = "user_id must be an integer";

/// Parses the `user_id` query value of the lookup-by-user operation.
///
/// A missing or blank value and a non-integer value are both validation
/// errors, with distinct messages.
pub fn parse_user_id(raw: Option<&str>) -> Result<i64, ServiceError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ServiceError::Validation(USER_ID_REQUIRED.to_string()));
    }
    raw.parse::<i64>()
        .map_err(|_| ServiceError::Validation(USER_ID_NOT_INTEGER.to_string()))
}

/// Roles and user-role assignments.
#[derive(Debug, Clone)]
pub struct AccessControlService<R = RoleRepository, UR = UserRoleRepository>
where
    R: RoleRepositoryTrait,
    UR: UserRoleRepositoryTrait,
{
    pub role_repo: Arc<R>,
    pub user_role_repo: Arc<UR>,
}

impl AccessControlService<RoleRepository, UserRoleRepository> {
    pub fn new(role_repo: RoleRepository, user_role_repo: UserRoleRepository) -> Self {
        Self {
            role_repo: Arc::new(role_repo),
            user_role_repo: Arc::new(user_role_repo),
        }
    }
}

impl<R, UR> AccessControlService<R, UR>
where
    R: RoleRepositoryTrait,
    UR: UserRoleRepositoryTrait,
{
    pub fn with_repos(role_repo: Arc<R>, user_role_repo: Arc<UR>) -> Self {
        Self {
            role_repo,
            user_role_repo,
        }
    }

    pub async fn get_roles(&self, filter: RoleFilter) -> Result<Vec<Role>, ServiceError> {
        let rows = self
            .role_repo
            .get_roles(filter)
            .await
            .map_err(ServiceError::from)?;
        Ok(rows.into_iter().map(Role::from).collect())
    }

    pub async fn get_role(&self, role_id: i64) -> Result<Option<Role>, ServiceError> {
        let row = self
            .role_repo
            .get_role(role_id)
            .await
            .map_err(ServiceError::from)?;
        Ok(row.map(Role::from))
    }

    pub async fn create_role(&self, role: NewRole) -> Result<Role, ServiceError> {
        let role = NewRole {
            role_name: validate_name("role_name", &role.role_name)?,
            description: normalize_optional_text(role.description),
        };
        let row = self
            .role_repo
            .create_role(role)
            .await
            .map_err(ServiceError::from)?;
        tracing::info!(role_id = row.id, role_name = %row.role_name, "role created");
        Ok(Role::from(row))
    }

    pub async fn update_role(&self, role_id: i64, changes: RoleChanges) -> Result<Role, ServiceError> {
        let changes = RoleChanges {
            role_name: changes
                .role_name
                .map(|name| validate_name("role_name", &name))
                .transpose()?,
            description: normalize_optional_text(changes.description),
        };
        let row = self
            .role_repo
            .update_role(role_id, changes)
            .await
            .map_err(|e| from_repository(e, "role", role_id))?;
        tracing::info!(role_id, "role updated");
        Ok(Role::from(row))
    }

    pub async fn delete_role(&self, role_id: i64) -> Result<(), ServiceError> {
        self.role_repo
            .delete_role(role_id)
            .await
            .map_err(|e| from_repository(e, "role", role_id))?;
        tracing::info!(role_id, "role deleted with its assignments");
        Ok(())
    }

    pub async fn get_user_roles(&self, filter: UserRoleFilter) -> Result<Vec<UserRole>, ServiceError> {
        let rows = self
            .user_role_repo
            .get_user_roles(filter)
            .await
            .map_err(ServiceError::from)?;
        Ok(rows.into_iter().map(UserRole::from).collect())
    }

    pub async fn get_user_role(&self, user_role_id: i64) -> Result<Option<UserRole>, ServiceError> {
        let row = self
            .user_role_repo
            .get_user_role(user_role_id)
            .await
            .map_err(ServiceError::from)?;
        Ok(row.map(UserRole::from))
    }

    pub async fn assign_role(&self, user_id: i64, role_id: i64) -> Result<UserRole, ServiceError> {
        let row = self
            .user_role_repo
            .assign_role(user_id, role_id)
            .await
            .map_err(ServiceError::from)?;
        tracing::info!(user_role_id = row.id, user_id, role_id, "role assigned to user");
        Ok(UserRole::from(row))
    }

    pub async fn delete_user_role(&self, user_role_id: i64) -> Result<(), ServiceError> {
        self.user_role_repo
            .delete_user_role(user_role_id)
            .await
            .map_err(|e| from_repository(e, "user role", user_role_id))?;
        tracing::info!(user_role_id, "role assignment removed");
        Ok(())
    }

    /// All assignments of one user, newest first. An unknown user or a user
    /// without roles both yield an empty list.
    pub async fn lookup_user_roles(&self, raw_user_id: Option<&str>) -> Result<Vec<UserRole>, ServiceError> {
        let user_id = parse_user_id(raw_user_id)?;
        let rows = self
            .user_role_repo
            .get_user_roles_for_user(user_id)
            .await
            .map_err(ServiceError::from)?;
        Ok(rows.into_iter().map(UserRole::from).collect())
    }
}
