//! End-to-end HTTP tests against a MySQL container. Needs Docker:
//! `cargo test -p dashboard-api -- --ignored`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::MySqlPool;
use testcontainers_modules::{
    mysql::Mysql,
    testcontainers::{runners::AsyncRunner, ContainerAsync},
};
use tower::ServiceExt;

use dashboard_api::router::build_router;
use dashboard_api::state::AppState;
use dashboard_lib::util::{connect_with_retry, run_migrations};

struct TestApp {
    _container: ContainerAsync<Mysql>,
    pool: MySqlPool,
    router: Router,
}

impl TestApp {
    async fn start() -> Self {
        let container = Mysql::default()
            .start()
            .await
            .expect("Failed to start MySQL container");
        let port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get MySQL port");

        let db_url = format!("mysql://root@127.0.0.1:{port}/test");
        let pool = connect_with_retry(&db_url, 5, 30).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let router = build_router(AppState::from_pool(pool.clone(), "test"));
        Self {
            _container: container,
            pool,
            router,
        }
    }

    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn insert_user(&self, email: &str) -> i64 {
        sqlx::query("INSERT INTO users (email, full_name) VALUES (?, ?)")
            .bind(email)
            .bind("Test User")
            .execute(&self.pool)
            .await
            .unwrap()
            .last_insert_id() as i64
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn integration_role_and_assignment_flow() {
    let app = TestApp::start().await;
    let user_id = app.insert_user("testuser@example.com").await;

    // Duplicate role names conflict and leave one row
    let (status, admin) = app
        .request(
            Method::POST,
            "/api/v1/roles/",
            Some(json!({"role_name": "ADMIN", "created_at": "2000-01-01T00:00:00Z"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(admin["description"], "");
    assert_ne!(admin["created_at"], "2000-01-01T00:00:00Z");
    let role_id = admin["id"].as_i64().unwrap();

    let (status, body) = app
        .request(Method::POST, "/api/v1/roles/", Some(json!({"role_name": "ADMIN"})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    let (status, roles) = app.request(Method::GET, "/api/v1/roles/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roles.as_array().unwrap().len(), 1);

    // Assignment carries the joined role and email
    let (status, assignment) = app
        .request(
            Method::POST,
            "/api/v1/user-roles/",
            Some(json!({"user": user_id, "role": role_id})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(assignment["user"], user_id);
    assert_eq!(assignment["user_email"], "testuser@example.com");
    assert_eq!(assignment["role_detail"]["role_name"], "ADMIN");

    let (status, _) = app
        .request(
            Method::POST,
            "/api/v1/user-roles/",
            Some(json!({"user": user_id, "role": role_id})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/user-roles/",
            Some(json!({"user": 987654, "role": role_id})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");

    let lookup = format!("/api/v1/user-roles/user_roles/?user_id={user_id}");
    let (status, held) = app.request(Method::GET, &lookup, None).await;
    assert_eq!(status, StatusCode::OK);
    let held = held.as_array().unwrap();
    assert_eq!(held.len(), 1);
    assert_eq!(held[0]["role_detail"]["role_name"], "ADMIN");

    let (status, nobody) = app
        .request(Method::GET, "/api/v1/user-roles/user_roles/?user_id=424242", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(nobody, json!([]));

    // PATCH leaves the name untouched
    let (status, patched) = app
        .request(
            Method::PATCH,
            &format!("/api/v1/roles/{role_id}/"),
            Some(json!({"description": "Full access"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["role_name"], "ADMIN");
    assert_eq!(patched["description"], "Full access");

    // Assignments reflect the current role, not a snapshot
    let (status, _) = app
        .request(
            Method::PATCH,
            &format!("/api/v1/roles/{role_id}/"),
            Some(json!({"role_name": "SUPERUSER"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let assignment_id = assignment["id"].as_i64().unwrap();
    let (status, reread) = app
        .request(Method::GET, &format!("/api/v1/user-roles/{assignment_id}/"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reread["role_detail"]["role_name"], "SUPERUSER");
    assert_eq!(reread["role_detail"]["description"], "Full access");

    let (_, held) = app.request(Method::GET, &lookup, None).await;
    assert_eq!(held[0]["role_detail"]["role_name"], "SUPERUSER");

    // Deleting the role cascades to its assignments
    let (status, _) = app
        .request(Method::DELETE, &format!("/api/v1/roles/{role_id}/"), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, held) = app.request(Method::GET, &lookup, None).await;
    assert_eq!(held, json!([]));

    let (status, body) = app
        .request(Method::GET, &format!("/api/v1/roles/{role_id}/"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn integration_reference_data_flow() {
    let app = TestApp::start().await;

    let (status, disease) = app
        .request(Method::POST, "/api/v1/diseases/", Some(json!({"disease_name": "Malaria"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(disease["is_active"], true);

    let (status, _) = app
        .request(Method::POST, "/api/v1/diseases/", Some(json!({"disease_name": "Malaria"})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, active) = app
        .request(Method::GET, "/api/v1/diseases/?is_active=true&search=mal", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(active.as_array().unwrap().len(), 1);

    let (status, location) = app
        .request(
            Method::POST,
            "/api/v1/locations/",
            Some(json!({"district_name": "Gulu", "latitude": 2.78, "longitude": 32.29})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location["area_name"], Value::Null);
    let location_id = location["id"].as_i64().unwrap();

    let (status, patched) = app
        .request(
            Method::PATCH,
            &format!("/api/v1/locations/{location_id}/"),
            Some(json!({"area_name": "Layibi"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["area_name"], "Layibi");
    assert_eq!(patched["latitude"], 2.78);

    let (status, cleared) = app
        .request(
            Method::PATCH,
            &format!("/api/v1/locations/{location_id}/"),
            Some(json!({"latitude": null, "longitude": null})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["latitude"], Value::Null);
    assert_eq!(cleared["area_name"], "Layibi");

    let (status, _) = app
        .request(Method::DELETE, &format!("/api/v1/locations/{location_id}/"), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .request(Method::DELETE, &format!("/api/v1/locations/{location_id}/"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
