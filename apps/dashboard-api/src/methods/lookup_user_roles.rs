use axum::Json;

use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::extract::QueryParams;
use crate::methods::entities::{UserRoleLookupQuery, UserRoleResponse};
use crate::methods::routes::USER_ROLES_LOOKUP_PATH;
use crate::state::AppState;

/// All role assignments held by one user.
///
/// A user with no assignments, or an id that matches no user, yields an
/// empty list rather than 404.
#[utoipa::path(
    get,
    path = USER_ROLES_LOOKUP_PATH,
    tag = "user-roles",
    params(UserRoleLookupQuery),
    responses(
        (status = 200, description = "Assignments of the user, newest first", body = Vec<UserRoleResponse>),
        (status = 400, description = "user_id missing or not an integer", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn lookup_user_roles(
    axum::extract::State(state): axum::extract::State<AppState>,
    QueryParams(query): QueryParams<UserRoleLookupQuery>,
) -> Result<Json<Vec<UserRoleResponse>>, ApiError> {
    state
        .access
        .lookup_user_roles(query.user_id.as_deref())
        .await
        .map(|user_roles| Json(user_roles.into_iter().map(UserRoleResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "lookup_user_roles"))
}
