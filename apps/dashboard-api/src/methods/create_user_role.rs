use axum::{http::StatusCode, Json};

use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::extract::ValidatedJson;
use crate::methods::entities::{CreateUserRoleRequest, UserRoleResponse};
use crate::methods::routes::USER_ROLES_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = USER_ROLES_PATH,
    tag = "user-roles",
    request_body = CreateUserRoleRequest,
    responses(
        (status = 201, description = "Role assigned to user", body = UserRoleResponse),
        (status = 400, description = "Missing fields or unknown user/role", body = ErrorResponse),
        (status = 409, description = "User already has this role", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_user_role(
    axum::extract::State(state): axum::extract::State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRoleRequest>,
) -> Result<(StatusCode, Json<UserRoleResponse>), ApiError> {
    state
        .access
        .assign_role(payload.user, payload.role)
        .await
        .map(|user_role| (StatusCode::CREATED, Json(UserRoleResponse::from(user_role))))
        .map_err(|e| handle_service_error(e, &state.env, "create_user_role"))
}
