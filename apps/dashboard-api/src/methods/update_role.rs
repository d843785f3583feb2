use axum::Json;
use dashboard_lib::entities::RoleChanges;

use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::extract::ValidatedJson;
use crate::methods::entities::{PatchRoleRequest, RoleResponse, UpdateRoleRequest};
use crate::methods::routes::ROLES_BY_ID_PATH;
use crate::state::AppState;

async fn apply(state: AppState, id: String, changes: RoleChanges) -> Result<Json<RoleResponse>, ApiError> {
    let parsed_id: i64 = id.parse().map_err(|_| ApiError::role_not_found())?;

    state
        .access
        .update_role(parsed_id, changes)
        .await
        .map(|role| Json(RoleResponse::from(role)))
        .map_err(|e| handle_service_error(e, &state.env, "update_role"))
}

#[utoipa::path(
    put,
    path = ROLES_BY_ID_PATH,
    tag = "roles",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated successfully", body = RoleResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 409, description = "Role name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_role(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateRoleRequest>,
) -> Result<Json<RoleResponse>, ApiError> {
    apply(state, id, payload.into()).await
}

#[utoipa::path(
    patch,
    path = ROLES_BY_ID_PATH,
    tag = "roles",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    request_body = PatchRoleRequest,
    responses(
        (status = 200, description = "Role updated successfully", body = RoleResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 409, description = "Role name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn patch_role(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    ValidatedJson(payload): ValidatedJson<PatchRoleRequest>,
) -> Result<Json<RoleResponse>, ApiError> {
    apply(state, id, payload.into()).await
}
