use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::methods::entities::{
    CreateDiseaseRequest, CreateLocationRequest, CreateRoleRequest, CreateUserRoleRequest,
    DiseaseResponse, LocationResponse, PatchDiseaseRequest, PatchLocationRequest, PatchRoleRequest,
    RoleResponse, UpdateDiseaseRequest, UpdateLocationRequest, UpdateRoleRequest, UserRoleResponse,
};
use crate::methods::routes::API_V1_PREFIX;
use crate::methods::{
    create_role, create_user_role, delete_role, delete_user_role, diseases, get_role_by_id,
    get_roles, get_user_role_by_id, get_user_roles, health_check, locations, lookup_user_roles,
    update_role,
};

/// Resource routes, documented relative to the `/api/v1` prefix.
#[derive(OpenApi)]
#[openapi(
    paths(
        get_roles::get_roles,
        create_role::create_role,
        get_role_by_id::get_role_by_id,
        update_role::update_role,
        update_role::patch_role,
        delete_role::delete_role,
        get_user_roles::get_user_roles,
        create_user_role::create_user_role,
        get_user_role_by_id::get_user_role_by_id,
        delete_user_role::delete_user_role,
        lookup_user_roles::lookup_user_roles,
        diseases::get_diseases,
        diseases::create_disease,
        diseases::get_disease_by_id,
        diseases::update_disease,
        diseases::patch_disease,
        diseases::delete_disease,
        locations::get_locations,
        locations::create_location,
        locations::get_location_by_id,
        locations::update_location,
        locations::patch_location,
        locations::delete_location,
    ),
    components(schemas(
        ErrorResponse,
        CreateRoleRequest, UpdateRoleRequest, PatchRoleRequest, RoleResponse,
        CreateUserRoleRequest, UserRoleResponse,
        CreateDiseaseRequest, UpdateDiseaseRequest, PatchDiseaseRequest, DiseaseResponse,
        CreateLocationRequest, UpdateLocationRequest, PatchLocationRequest, LocationResponse,
    )),
    tags(
        (name = "roles", description = "Role management endpoints"),
        (name = "user-roles", description = "Role assignment endpoints"),
        (name = "diseases", description = "Disease reference data"),
        (name = "locations", description = "Location reference data")
    )
)]
struct V1Doc;

#[derive(OpenApi)]
#[openapi(
    paths(health_check::health_check),
    tags((name = "service", description = "Service endpoints"))
)]
struct ServiceDoc;

/// Full document served at `/api-doc/openapi.json`.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    ServiceDoc::openapi().nest(API_V1_PREFIX, V1Doc::openapi())
}
