use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::extract::QueryParams;
use crate::methods::entities::{UserRoleQuery, UserRoleResponse};
use crate::methods::routes::USER_ROLES_PATH;
use crate::state::AppState;
use axum::Json;

#[utoipa::path(
    get,
    path = USER_ROLES_PATH,
    tag = "user-roles",
    params(UserRoleQuery),
    responses(
        (status = 200, description = "Assignments, newest first", body = Vec<UserRoleResponse>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_user_roles(
    axum::extract::State(state): axum::extract::State<AppState>,
    QueryParams(query): QueryParams<UserRoleQuery>,
) -> Result<Json<Vec<UserRoleResponse>>, ApiError> {
    state
        .access
        .get_user_roles(query.into())
        .await
        .map(|user_roles| Json(user_roles.into_iter().map(UserRoleResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "get_user_roles"))
}
