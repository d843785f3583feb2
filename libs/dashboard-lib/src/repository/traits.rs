use async_trait::async_trait;

use crate::entities::{
    DiseaseChanges, DiseaseFilter, LocationChanges, NewDisease, NewLocation, NewRole, RoleChanges,
    RoleFilter, UserRoleFilter,
};
use crate::repository::errors::RepositoryError;
use crate::repository::models::{DiseaseRow, LocationRow, RoleRow, UserRoleRow};

#[async_trait]
pub trait RoleRepositoryTrait: Send + Sync {
    async fn create_role(&self, role: NewRole) -> Result<RoleRow, RepositoryError>;
    async fn get_role(&self, role_id: i64) -> Result<Option<RoleRow>, RepositoryError>;
    async fn update_role(&self, role_id: i64, changes: RoleChanges) -> Result<RoleRow, RepositoryError>;
    async fn delete_role(&self, role_id: i64) -> Result<(), RepositoryError>;
    async fn get_roles(&self, filter: RoleFilter) -> Result<Vec<RoleRow>, RepositoryError>;
}

#[async_trait]
pub trait UserRoleRepositoryTrait: Send + Sync {
    async fn assign_role(&self, user_id: i64, role_id: i64) -> Result<UserRoleRow, RepositoryError>;
    async fn get_user_role(&self, user_role_id: i64) -> Result<Option<UserRoleRow>, RepositoryError>;
    async fn delete_user_role(&self, user_role_id: i64) -> Result<(), RepositoryError>;
    async fn get_user_roles(&self, filter: UserRoleFilter) -> Result<Vec<UserRoleRow>, RepositoryError>;
    async fn get_user_roles_for_user(&self, user_id: i64) -> Result<Vec<UserRoleRow>, RepositoryError>;
}

#[async_trait]
pub trait DiseaseRepositoryTrait: Send + Sync {
    async fn create_disease(&self, disease: NewDisease) -> Result<DiseaseRow, RepositoryError>;
    async fn get_disease(&self, disease_id: i64) -> Result<Option<DiseaseRow>, RepositoryError>;
    async fn update_disease(&self, disease_id: i64, changes: DiseaseChanges) -> Result<DiseaseRow, RepositoryError>;
    async fn delete_disease(&self, disease_id: i64) -> Result<(), RepositoryError>;
    async fn get_diseases(&self, filter: DiseaseFilter) -> Result<Vec<DiseaseRow>, RepositoryError>;
}

#[async_trait]
pub trait LocationRepositoryTrait: Send + Sync {
    async fn create_location(&self, location: NewLocation) -> Result<LocationRow, RepositoryError>;
    async fn get_location(&self, location_id: i64) -> Result<Option<LocationRow>, RepositoryError>;
    async fn update_location(&self, location_id: i64, changes: LocationChanges) -> Result<LocationRow, RepositoryError>;
    async fn delete_location(&self, location_id: i64) -> Result<(), RepositoryError>;
    async fn get_locations(&self) -> Result<Vec<LocationRow>, RepositoryError>;
}
