use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::extract::QueryParams;
use crate::methods::entities::{RoleQuery, RoleResponse};
use crate::methods::routes::ROLES_PATH;
use crate::state::AppState;
use axum::Json;

#[utoipa::path(
    get,
    path = ROLES_PATH,
    tag = "roles",
    params(RoleQuery),
    responses(
        (status = 200, description = "Roles ordered by name", body = Vec<RoleResponse>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_roles(
    axum::extract::State(state): axum::extract::State<AppState>,
    QueryParams(query): QueryParams<RoleQuery>,
) -> Result<Json<Vec<RoleResponse>>, ApiError> {
    state
        .access
        .get_roles(query.into())
        .await
        .map(|roles| Json(roles.into_iter().map(RoleResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "get_roles"))
}
