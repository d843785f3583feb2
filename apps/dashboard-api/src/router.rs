use axum::{
    routing::get,
    Router,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::methods::create_role::create_role;
use crate::methods::create_user_role::create_user_role;
use crate::methods::delete_role::delete_role;
use crate::methods::delete_user_role::delete_user_role;
use crate::methods::diseases::{
    create_disease, delete_disease, get_disease_by_id, get_diseases, patch_disease, update_disease,
};
use crate::methods::get_role_by_id::get_role_by_id;
use crate::methods::get_roles::get_roles;
use crate::methods::get_user_role_by_id::get_user_role_by_id;
use crate::methods::get_user_roles::get_user_roles;
use crate::methods::health_check::health_check;
use crate::methods::locations::{
    create_location, delete_location, get_location_by_id, get_locations, patch_location,
    update_location,
};
use crate::methods::lookup_user_roles::lookup_user_roles;
use crate::methods::routes::{
    API_V1_PREFIX, DISEASES_BY_ID_PATH, DISEASES_PATH, LOCATIONS_BY_ID_PATH, LOCATIONS_PATH,
    OPENAPI_JSON_PATH, ROLES_BY_ID_PATH, ROLES_PATH, SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH,
    USER_ROLES_BY_ID_PATH, USER_ROLES_LOOKUP_PATH, USER_ROLES_PATH,
};
use crate::methods::update_role::{patch_role, update_role};
use crate::openapi::api_doc;
use crate::state::AppState;

/// Routes and state without the middleware stack, which `main` layers on.
pub fn build_router(state: AppState) -> Router {
    let v1_routes = Router::new()
        // Role endpoints
        .route(ROLES_PATH, get(get_roles).post(create_role))
        .route(
            ROLES_BY_ID_PATH,
            get(get_role_by_id)
                .put(update_role)
                .patch(patch_role)
                .delete(delete_role),
        )
        // Role assignment endpoints; the lookup path is static so it wins over `{id}`
        .route(USER_ROLES_PATH, get(get_user_roles).post(create_user_role))
        .route(USER_ROLES_LOOKUP_PATH, get(lookup_user_roles))
        .route(
            USER_ROLES_BY_ID_PATH,
            get(get_user_role_by_id).delete(delete_user_role),
        )
        // Reference data
        .route(DISEASES_PATH, get(get_diseases).post(create_disease))
        .route(
            DISEASES_BY_ID_PATH,
            get(get_disease_by_id)
                .put(update_disease)
                .patch(patch_disease)
                .delete(delete_disease),
        )
        .route(LOCATIONS_PATH, get(get_locations).post(create_location))
        .route(
            LOCATIONS_BY_ID_PATH,
            get(get_location_by_id)
                .put(update_location)
                .patch(patch_location)
                .delete(delete_location),
        );

    let root_routes = Router::new()
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url(OPENAPI_JSON_PATH, api_doc()));

    Router::new()
        .nest(API_V1_PREFIX, v1_routes)
        .merge(root_routes)
        .with_state(state)
}
