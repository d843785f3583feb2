//! Location reference data. Nullable fields can be cleared with an explicit `null` on PATCH.

use axum::{http::StatusCode, Json};
use dashboard_lib::entities::LocationChanges;

use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::extract::ValidatedJson;
use crate::methods::entities::{
    CreateLocationRequest, LocationResponse, PatchLocationRequest, UpdateLocationRequest,
};
use crate::methods::routes::{LOCATIONS_BY_ID_PATH, LOCATIONS_PATH};
use crate::state::AppState;

fn parse_id(id: &str) -> Result<i64, ApiError> {
    id.parse().map_err(|_| ApiError::location_not_found())
}

#[utoipa::path(
    get,
    path = LOCATIONS_PATH,
    tag = "locations",
    responses(
        (status = 200, description = "Locations ordered by district, then id", body = Vec<LocationResponse>),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_locations(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<Vec<LocationResponse>>, ApiError> {
    state
        .reference
        .get_locations()
        .await
        .map(|locations| Json(locations.into_iter().map(LocationResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "get_locations"))
}

#[utoipa::path(
    get,
    path = LOCATIONS_BY_ID_PATH,
    tag = "locations",
    params(("id" = i64, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location found", body = LocationResponse),
        (status = 404, description = "Location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_location_by_id(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<LocationResponse>, ApiError> {
    let parsed_id = parse_id(&id)?;

    state
        .reference
        .get_location(parsed_id)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "get_location"))?
        .map(|location| Json(LocationResponse::from(location)))
        .ok_or_else(ApiError::location_not_found)
}

#[utoipa::path(
    post,
    path = LOCATIONS_PATH,
    tag = "locations",
    request_body = CreateLocationRequest,
    responses(
        (status = 201, description = "Location created", body = LocationResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_location(
    axum::extract::State(state): axum::extract::State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateLocationRequest>,
) -> Result<(StatusCode, Json<LocationResponse>), ApiError> {
    state
        .reference
        .create_location(payload.into())
        .await
        .map(|location| (StatusCode::CREATED, Json(LocationResponse::from(location))))
        .map_err(|e| handle_service_error(e, &state.env, "create_location"))
}

async fn apply(state: AppState, id: String, changes: LocationChanges) -> Result<Json<LocationResponse>, ApiError> {
    let parsed_id = parse_id(&id)?;

    state
        .reference
        .update_location(parsed_id, changes)
        .await
        .map(|location| Json(LocationResponse::from(location)))
        .map_err(|e| handle_service_error(e, &state.env, "update_location"))
}

#[utoipa::path(
    put,
    path = LOCATIONS_BY_ID_PATH,
    tag = "locations",
    params(("id" = i64, Path, description = "Location ID")),
    request_body = UpdateLocationRequest,
    responses(
        (status = 200, description = "Location updated", body = LocationResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_location(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateLocationRequest>,
) -> Result<Json<LocationResponse>, ApiError> {
    apply(state, id, payload.into()).await
}

#[utoipa::path(
    patch,
    path = LOCATIONS_BY_ID_PATH,
    tag = "locations",
    params(("id" = i64, Path, description = "Location ID")),
    request_body = PatchLocationRequest,
    responses(
        (status = 200, description = "Location updated", body = LocationResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn patch_location(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    ValidatedJson(payload): ValidatedJson<PatchLocationRequest>,
) -> Result<Json<LocationResponse>, ApiError> {
    apply(state, id, payload.into()).await
}

#[utoipa::path(
    delete,
    path = LOCATIONS_BY_ID_PATH,
    tag = "locations",
    params(("id" = i64, Path, description = "Location ID")),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 404, description = "Location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_location(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<StatusCode, ApiError> {
    let parsed_id = parse_id(&id)?;

    state
        .reference
        .delete_location(parsed_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_location"))
}
