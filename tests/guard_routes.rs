use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;
use tower::ServiceExt;

use staffhub::{
    auth::Role,
    db::entities::department,
    routes::API_PREFIX,
    test_helpers::{bare_test_app, bearer, test_app},
};

fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

async fn json_response(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("request should succeed");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body should be json");
    (status, json)
}

#[tokio::test]
async fn guarded_route_requires_auth_header() {
    let (status, json) = json_response(
        bare_test_app(),
        Request::builder()
            .method("GET")
            .uri(api_path("/getEmployee"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);
    assert_eq!(json["errorCode"], "AUTH_ERROR");
    assert_eq!(json["message"], "Missing/invalid Authorization header");
}

#[tokio::test]
async fn guarded_route_rejects_garbage_token() {
    let (status, json) = json_response(
        bare_test_app(),
        Request::builder()
            .method("GET")
            .uri(api_path("/getEmployee"))
            .header("authorization", "Bearer not-a-jwt")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid or expired token");
}

#[tokio::test]
async fn department_write_rejects_user_token() {
    let (status, json) = json_response(
        bare_test_app(),
        Request::builder()
            .method("POST")
            .uri(api_path("/departments"))
            .header("authorization", bearer("user@example.com", vec![Role::User]))
            .header("content-type", "application/json")
            .body(Body::from(json!({ "name": "Finance" }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["errorCode"], "FORBIDDEN");
    assert_eq!(json["message"], "Missing required role");
}

#[tokio::test]
async fn department_write_rejects_hr_token() {
    // Department management is admin-only; HR only gets read access.
    let (status, json) = json_response(
        bare_test_app(),
        Request::builder()
            .method("POST")
            .uri(api_path("/departments"))
            .header("authorization", bearer("hr@example.com", vec![Role::Hr]))
            .header("content-type", "application/json")
            .body(Body::from(json!({ "name": "Finance" }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Missing required role");
}

#[tokio::test]
async fn department_write_allows_admin_token() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![department::Model {
            id: 1,
            name: "Finance".to_string(),
            description: None,
        }]])
        .into_connection();

    let (status, json) = json_response(
        test_app(db),
        Request::builder()
            .method("POST")
            .uri(api_path("/departments"))
            .header(
                "authorization",
                bearer("admin@example.com", vec![Role::Admin]),
            )
            .header("content-type", "application/json")
            .body(Body::from(json!({ "name": "Finance" }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Department created successfully");
    assert_eq!(json["data"]["name"], "Finance");
}

#[tokio::test]
async fn department_reads_are_open_to_any_token() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![department::Model {
            id: 1,
            name: "Finance".to_string(),
            description: Some("Money things".to_string()),
        }]])
        .into_connection();

    let (status, json) = json_response(
        test_app(db),
        Request::builder()
            .method("GET")
            .uri(api_path("/departments"))
            .header("authorization", bearer("user@example.com", vec![Role::User]))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Departments retrieved successfully");
    assert_eq!(json["data"][0]["name"], "Finance");
}

#[tokio::test]
async fn unknown_route_is_normalized_to_the_envelope() {
    let (status, json) = json_response(
        bare_test_app(),
        Request::builder()
            .method("GET")
            .uri(api_path("/no-such-route"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["errorCode"], "NOT_FOUND");
    assert_eq!(json["message"], "Not Found");
    assert!(json["data"].is_null());
}
