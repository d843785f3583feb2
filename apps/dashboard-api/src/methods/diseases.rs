//! Disease reference data. Same CRUD surface as roles.

use axum::{http::StatusCode, Json};
use dashboard_lib::entities::DiseaseChanges;

use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::extract::{QueryParams, ValidatedJson};
use crate::methods::entities::{
    CreateDiseaseRequest, DiseaseQuery, DiseaseResponse, PatchDiseaseRequest, UpdateDiseaseRequest,
};
use crate::methods::routes::{DISEASES_BY_ID_PATH, DISEASES_PATH};
use crate::state::AppState;

fn parse_id(id: &str) -> Result<i64, ApiError> {
    id.parse().map_err(|_| ApiError::disease_not_found())
}

#[utoipa::path(
    get,
    path = DISEASES_PATH,
    tag = "diseases",
    params(DiseaseQuery),
    responses(
        (status = 200, description = "Diseases ordered by name", body = Vec<DiseaseResponse>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_diseases(
    axum::extract::State(state): axum::extract::State<AppState>,
    QueryParams(query): QueryParams<DiseaseQuery>,
) -> Result<Json<Vec<DiseaseResponse>>, ApiError> {
    state
        .reference
        .get_diseases(query.into())
        .await
        .map(|diseases| Json(diseases.into_iter().map(DiseaseResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "get_diseases"))
}

#[utoipa::path(
    get,
    path = DISEASES_BY_ID_PATH,
    tag = "diseases",
    params(("id" = i64, Path, description = "Disease ID")),
    responses(
        (status = 200, description = "Disease found", body = DiseaseResponse),
        (status = 404, description = "Disease not found", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_disease_by_id(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<DiseaseResponse>, ApiError> {
    let parsed_id = parse_id(&id)?;

    state
        .reference
        .get_disease(parsed_id)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "get_disease"))?
        .map(|disease| Json(DiseaseResponse::from(disease)))
        .ok_or_else(ApiError::disease_not_found)
}

#[utoipa::path(
    post,
    path = DISEASES_PATH,
    tag = "diseases",
    request_body = CreateDiseaseRequest,
    responses(
        (status = 201, description = "Disease created", body = DiseaseResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Disease name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_disease(
    axum::extract::State(state): axum::extract::State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDiseaseRequest>,
) -> Result<(StatusCode, Json<DiseaseResponse>), ApiError> {
    state
        .reference
        .create_disease(payload.into())
        .await
        .map(|disease| (StatusCode::CREATED, Json(DiseaseResponse::from(disease))))
        .map_err(|e| handle_service_error(e, &state.env, "create_disease"))
}

async fn apply(state: AppState, id: String, changes: DiseaseChanges) -> Result<Json<DiseaseResponse>, ApiError> {
    let parsed_id = parse_id(&id)?;

    state
        .reference
        .update_disease(parsed_id, changes)
        .await
        .map(|disease| Json(DiseaseResponse::from(disease)))
        .map_err(|e| handle_service_error(e, &state.env, "update_disease"))
}

#[utoipa::path(
    put,
    path = DISEASES_BY_ID_PATH,
    tag = "diseases",
    params(("id" = i64, Path, description = "Disease ID")),
    request_body = UpdateDiseaseRequest,
    responses(
        (status = 200, description = "Disease updated", body = DiseaseResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Disease not found", body = ErrorResponse),
        (status = 409, description = "Disease name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_disease(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateDiseaseRequest>,
) -> Result<Json<DiseaseResponse>, ApiError> {
    apply(state, id, payload.into()).await
}

#[utoipa::path(
    patch,
    path = DISEASES_BY_ID_PATH,
    tag = "diseases",
    params(("id" = i64, Path, description = "Disease ID")),
    request_body = PatchDiseaseRequest,
    responses(
        (status = 200, description = "Disease updated", body = DiseaseResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Disease not found", body = ErrorResponse),
        (status = 409, description = "Disease name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn patch_disease(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    ValidatedJson(payload): ValidatedJson<PatchDiseaseRequest>,
) -> Result<Json<DiseaseResponse>, ApiError> {
    apply(state, id, payload.into()).await
}

#[utoipa::path(
    delete,
    path = DISEASES_BY_ID_PATH,
    tag = "diseases",
    params(("id" = i64, Path, description = "Disease ID")),
    responses(
        (status = 204, description = "Disease deleted"),
        (status = 404, description = "Disease not found", body = ErrorResponse),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_disease(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<StatusCode, ApiError> {
    let parsed_id = parse_id(&id)?;

    state
        .reference
        .delete_disease(parsed_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_disease"))
}
