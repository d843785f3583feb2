pub mod role_repository;
pub mod user_role_repository;
pub mod disease_repository;
pub mod location_repository;
pub mod models;
pub mod errors;
pub mod traits;
mod search;

pub use role_repository::RoleRepository;
pub use user_role_repository::UserRoleRepository;
pub use disease_repository::DiseaseRepository;
pub use location_repository::LocationRepository;
pub use errors::RepositoryError;
