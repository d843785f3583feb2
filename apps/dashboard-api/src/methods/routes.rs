// API v1 routes (nested under /api/v1)
pub const ROLES_PATH: &str = "/roles/";
pub const ROLES_BY_ID_PATH: &str = "/roles/{id}/";
pub const USER_ROLES_PATH: &str = "/user-roles/";
pub const USER_ROLES_BY_ID_PATH: &str = "/user-roles/{id}/";
pub const USER_ROLES_LOOKUP_PATH: &str = "/user-roles/user_roles/";
pub const DISEASES_PATH: &str = "/diseases/";
pub const DISEASES_BY_ID_PATH: &str = "/diseases/{id}/";
pub const LOCATIONS_PATH: &str = "/locations/";
pub const LOCATIONS_BY_ID_PATH: &str = "/locations/{id}/";

// Root-level service routes (not versioned)
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-doc/openapi.json";

// API version prefix
pub const API_V1_PREFIX: &str = "/api/v1";
