use std::sync::Arc;

use dashboard_lib::access_service::AccessControlService;
use dashboard_lib::reference_service::ReferenceDataService;
use dashboard_lib::repository::{
    DiseaseRepository, LocationRepository, RoleRepository, UserRoleRepository,
};
use sqlx::MySqlPool;

#[derive(Clone)]
pub struct AppState {
    pub access: Arc<AccessControlService>,
    pub reference: Arc<ReferenceDataService>,
    pub env: String,
}

impl AppState {
    /// Wires every service onto one shared pool.
    pub fn from_pool(pool: MySqlPool, env: impl Into<String>) -> Self {
        let access = AccessControlService::new(
            RoleRepository::new(pool.clone()),
            UserRoleRepository::new(pool.clone()),
        );
        let reference = ReferenceDataService::new(
            DiseaseRepository::new(pool.clone()),
            LocationRepository::new(pool),
        );

        Self {
            access: Arc::new(access),
            reference: Arc::new(reference),
            env: env.into(),
        }
    }
}
