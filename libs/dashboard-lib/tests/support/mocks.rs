use async_trait::async_trait;
use mockall::mock;

use dashboard_lib::entities::{
    DiseaseChanges, DiseaseFilter, LocationChanges, NewDisease, NewLocation, NewRole, RoleChanges,
    RoleFilter, UserRoleFilter,
};
use dashboard_lib::repository::errors::RepositoryError;
use dashboard_lib::repository::models::{DiseaseRow, LocationRow, RoleRow, UserRoleRow};
use dashboard_lib::repository::traits::{
    DiseaseRepositoryTrait, LocationRepositoryTrait, RoleRepositoryTrait, UserRoleRepositoryTrait,
};

mock! {
    #[derive(Debug)]
    pub RoleRepo {}

    #[async_trait]
    impl RoleRepositoryTrait for RoleRepo {
        async fn create_role(&self, role: NewRole) -> Result<RoleRow, RepositoryError>;
        async fn get_role(&self, role_id: i64) -> Result<Option<RoleRow>, RepositoryError>;
        async fn update_role(&self, role_id: i64, changes: RoleChanges) -> Result<RoleRow, RepositoryError>;
        async fn delete_role(&self, role_id: i64) -> Result<(), RepositoryError>;
        async fn get_roles(&self, filter: RoleFilter) -> Result<Vec<RoleRow>, RepositoryError>;
    }
}

mock! {
    #[derive(Debug)]
    pub UserRoleRepo {}

    #[async_trait]
    impl UserRoleRepositoryTrait for UserRoleRepo {
        async fn assign_role(&self, user_id: i64, role_id: i64) -> Result<UserRoleRow, RepositoryError>;
        async fn get_user_role(&self, user_role_id: i64) -> Result<Option<UserRoleRow>, RepositoryError>;
        async fn delete_user_role(&self, user_role_id: i64) -> Result<(), RepositoryError>;
        async fn get_user_roles(&self, filter: UserRoleFilter) -> Result<Vec<UserRoleRow>, RepositoryError>;
        async fn get_user_roles_for_user(&self, user_id: i64) -> Result<Vec<UserRoleRow>, RepositoryError>;
    }
}

mock! {
    #[derive(Debug)]
    pub DiseaseRepo {}

    #[async_trait]
    impl DiseaseRepositoryTrait for DiseaseRepo {
        async fn create_disease(&self, disease: NewDisease) -> Result<DiseaseRow, RepositoryError>;
        async fn get_disease(&self, disease_id: i64) -> Result<Option<DiseaseRow>, RepositoryError>;
        async fn update_disease(&self, disease_id: i64, changes: DiseaseChanges) -> Result<DiseaseRow, RepositoryError>;
        async fn delete_disease(&self, disease_id: i64) -> Result<(), RepositoryError>;
        async fn get_diseases(&self, filter: DiseaseFilter) -> Result<Vec<DiseaseRow>, RepositoryError>;
    }
}

mock! {
    #[derive(Debug)]
    pub LocationRepo {}

    #[async_trait]
    impl LocationRepositoryTrait for LocationRepo {
        async fn create_location(&self, location: NewLocation) -> Result<LocationRow, RepositoryError>;
        async fn get_location(&self, location_id: i64) -> Result<Option<LocationRow>, RepositoryError>;
        async fn update_location(&self, location_id: i64, changes: LocationChanges) -> Result<LocationRow, RepositoryError>;
        async fn delete_location(&self, location_id: i64) -> Result<(), RepositoryError>;
        async fn get_locations(&self) -> Result<Vec<LocationRow>, RepositoryError>;
    }
}
