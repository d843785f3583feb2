use axum::{http::StatusCode, Json};

use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::extract::ValidatedJson;
use crate::methods::entities::{CreateRoleRequest, RoleResponse};
use crate::methods::routes::ROLES_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = ROLES_PATH,
    tag = "roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created successfully", body = RoleResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Role name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_role(
    axum::extract::State(state): axum::extract::State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRoleRequest>,
) -> Result<(StatusCode, Json<RoleResponse>), ApiError> {
    state
        .access
        .create_role(payload.into())
        .await
        .map(|role| (StatusCode::CREATED, Json(RoleResponse::from(role))))
        .map_err(|e| handle_service_error(e, &state.env, "create_role"))
}
