use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use dashboard_lib::entities::{
    Disease, DiseaseChanges, DiseaseFilter, Location, LocationChanges, NewDisease, NewLocation,
    NewRole, Role, RoleChanges, RoleFilter, UserRole, UserRoleFilter,
};

/// Tells an absent field (`None`) apart from an explicit `null` (`Some(None)`).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ==================== ROLES ====================

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateRoleRequest {
    #[validate(length(max = 255))]
    pub role_name: String,
    /// May be omitted or blank, never `null`.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<String>,
}

/// Full replacement; `role_name` is required.
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpdateRoleRequest {
    #[validate(length(max = 255))]
    pub role_name: String,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
pub struct PatchRoleRequest {
    #[validate(length(max = 255))]
    #[serde(default, deserialize_with = "deserialize_some")]
    pub role_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleResponse {
    pub id: i64,
    pub role_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        RoleResponse {
            id: role.id,
            role_name: role.role_name,
            description: role.description,
            created_at: role.created_at,
        }
    }
}

impl From<CreateRoleRequest> for NewRole {
    fn from(req: CreateRoleRequest) -> Self {
        NewRole {
            role_name: req.role_name,
            description: req.description,
        }
    }
}

impl From<UpdateRoleRequest> for RoleChanges {
    fn from(req: UpdateRoleRequest) -> Self {
        RoleChanges {
            role_name: Some(req.role_name),
            description: req.description,
        }
    }
}

impl From<PatchRoleRequest> for RoleChanges {
    fn from(req: PatchRoleRequest) -> Self {
        RoleChanges {
            role_name: req.role_name,
            description: req.description,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RoleQuery {
    /// Exact role name.
    pub role_name: Option<String>,
    /// Terms matched against role name and description.
    pub search: Option<String>,
}

impl From<RoleQuery> for RoleFilter {
    fn from(query: RoleQuery) -> Self {
        RoleFilter {
            role_name: query.role_name,
            search: query.search,
        }
    }
}

// ==================== USER ROLES ====================

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateUserRoleRequest {
    pub user: i64,
    pub role: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserRoleResponse {
    pub id: i64,
    pub user: i64,
    pub user_email: String,
    pub role: i64,
    pub role_detail: RoleResponse,
    pub assigned_at: DateTime<Utc>,
}

impl From<UserRole> for UserRoleResponse {
    fn from(user_role: UserRole) -> Self {
        UserRoleResponse {
            id: user_role.id,
            user: user_role.user,
            user_email: user_role.user_email,
            role: user_role.role,
            role_detail: RoleResponse::from(user_role.role_detail),
            assigned_at: user_role.assigned_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct UserRoleQuery {
    pub user: Option<i64>,
    pub role: Option<i64>,
    /// Terms matched against user email, user full name and role name.
    pub search: Option<String>,
}

impl From<UserRoleQuery> for UserRoleFilter {
    fn from(query: UserRoleQuery) -> Self {
        UserRoleFilter {
            user: query.user,
            role: query.role,
            search: query.search,
        }
    }
}

/// `user_id` stays a string here so that a missing value and a non-integer
/// value can be reported with their own messages.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct UserRoleLookupQuery {
    #[param(value_type = Option<i64>)]
    pub user_id: Option<String>,
}

// ==================== DISEASES ====================

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateDiseaseRequest {
    #[validate(length(max = 255))]
    pub disease_name: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpdateDiseaseRequest {
    #[validate(length(max = 255))]
    pub disease_name: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
pub struct PatchDiseaseRequest {
    #[validate(length(max = 255))]
    pub disease_name: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiseaseResponse {
    pub id: i64,
    pub disease_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Disease> for DiseaseResponse {
    fn from(disease: Disease) -> Self {
        DiseaseResponse {
            id: disease.id,
            disease_name: disease.disease_name,
            is_active: disease.is_active,
            created_at: disease.created_at,
        }
    }
}

impl From<CreateDiseaseRequest> for NewDisease {
    fn from(req: CreateDiseaseRequest) -> Self {
        NewDisease {
            disease_name: req.disease_name,
            is_active: req.is_active,
        }
    }
}

impl From<UpdateDiseaseRequest> for DiseaseChanges {
    fn from(req: UpdateDiseaseRequest) -> Self {
        DiseaseChanges {
            disease_name: Some(req.disease_name),
            is_active: req.is_active,
        }
    }
}

impl From<PatchDiseaseRequest> for DiseaseChanges {
    fn from(req: PatchDiseaseRequest) -> Self {
        DiseaseChanges {
            disease_name: req.disease_name,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DiseaseQuery {
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl From<DiseaseQuery> for DiseaseFilter {
    fn from(query: DiseaseQuery) -> Self {
        DiseaseFilter {
            is_active: query.is_active,
            search: query.search,
        }
    }
}

// ==================== LOCATIONS ====================

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateLocationRequest {
    #[validate(length(max = 255))]
    pub district_name: String,
    #[validate(length(max = 255))]
    pub area_name: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    pub is_active: Option<bool>,
}

/// Full replacement of the required fields. Nullable fields follow the
/// same absent/`null` rules as PATCH.
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpdateLocationRequest {
    #[validate(length(max = 255))]
    pub district_name: String,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub area_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub latitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub longitude: Option<Option<f64>>,
    pub is_active: Option<bool>,
}

/// Omitted fields are left untouched; an explicit `null` clears a nullable field.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema, Validate)]
pub struct PatchLocationRequest {
    #[validate(length(max = 255))]
    pub district_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub area_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub latitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub longitude: Option<Option<f64>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocationResponse {
    pub id: i64,
    pub district_name: String,
    pub area_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        LocationResponse {
            id: location.id,
            district_name: location.district_name,
            area_name: location.area_name,
            latitude: location.latitude,
            longitude: location.longitude,
            is_active: location.is_active,
            created_at: location.created_at,
        }
    }
}

impl From<CreateLocationRequest> for NewLocation {
    fn from(req: CreateLocationRequest) -> Self {
        NewLocation {
            district_name: req.district_name,
            area_name: req.area_name,
            latitude: req.latitude,
            longitude: req.longitude,
            is_active: req.is_active,
        }
    }
}

impl From<UpdateLocationRequest> for LocationChanges {
    fn from(req: UpdateLocationRequest) -> Self {
        LocationChanges {
            district_name: Some(req.district_name),
            area_name: req.area_name,
            latitude: req.latitude,
            longitude: req.longitude,
            is_active: req.is_active,
        }
    }
}

impl From<PatchLocationRequest> for LocationChanges {
    fn from(req: PatchLocationRequest) -> Self {
        LocationChanges {
            district_name: req.district_name,
            area_name: req.area_name,
            latitude: req.latitude,
            longitude: req.longitude,
            is_active: req.is_active,
        }
    }
}
