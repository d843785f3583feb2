use crate::methods::routes::SERVICE_HEALTH_PATH;

/// Liveness probe. Does not touch the database.
#[utoipa::path(
    get,
    path = SERVICE_HEALTH_PATH,
    tag = "service",
    responses(
        (status = 200, description = "Process is up", body = String),
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
