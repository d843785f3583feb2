use axum::Json;

use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::methods::entities::UserRoleResponse;
use crate::methods::routes::USER_ROLES_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USER_ROLES_BY_ID_PATH,
    tag = "user-roles",
    params(
        ("id" = i64, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Assignment found", body = UserRoleResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_user_role_by_id(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<UserRoleResponse>, ApiError> {
    let parsed_id: i64 = id.parse().map_err(|_| ApiError::user_role_not_found())?;

    state
        .access
        .get_user_role(parsed_id)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "get_user_role"))?
        .map(|user_role| Json(UserRoleResponse::from(user_role)))
        .ok_or_else(ApiError::user_role_not_found)
}
