use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::methods::routes::ROLES_BY_ID_PATH;
use crate::state::AppState;
use axum::http::StatusCode;

/// Deleting a role also removes every assignment of it.
#[utoipa::path(
    delete,
    path = ROLES_BY_ID_PATH,
    tag = "roles",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 204, description = "Role and its assignments deleted"),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_role(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<StatusCode, ApiError> {
    let parsed_id: i64 = id.parse().map_err(|_| ApiError::role_not_found())?;

    state
        .access
        .delete_role(parsed_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_role"))
}
