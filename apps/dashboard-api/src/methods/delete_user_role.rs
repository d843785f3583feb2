use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::methods::routes::USER_ROLES_BY_ID_PATH;
use crate::state::AppState;
use axum::http::StatusCode;

#[utoipa::path(
    delete,
    path = USER_ROLES_BY_ID_PATH,
    tag = "user-roles",
    params(
        ("id" = i64, Path, description = "Assignment ID")
    ),
    responses(
        (status = 204, description = "Assignment removed"),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_user_role(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<StatusCode, ApiError> {
    let parsed_id: i64 = id.parse().map_err(|_| ApiError::user_role_not_found())?;

    state
        .access
        .delete_user_role(parsed_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_user_role"))
}
