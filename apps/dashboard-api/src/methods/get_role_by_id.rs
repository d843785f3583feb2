use axum::Json;
use crate::error::{ApiError, ErrorResponse, handle_service_error};
use crate::methods::entities::RoleResponse;
use crate::state::AppState;
use crate::methods::routes::ROLES_BY_ID_PATH;

#[utoipa::path(
    get,
    path = ROLES_BY_ID_PATH,
    tag = "roles",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role found", body = RoleResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_role_by_id(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<RoleResponse>, ApiError> {
    let parsed_id: i64 = id.parse().map_err(|_| ApiError::role_not_found())?;

    state.access
        .get_role(parsed_id)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "get_role"))?
        .map(|role| Json(RoleResponse::from(role)))
        .ok_or_else(ApiError::role_not_found)
}
