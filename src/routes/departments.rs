use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    middleware,
    routing::{get, patch, post},
};
use serde::Deserialize;

use crate::{
    auth::{Role, jwt::jwt_auth, role_layer::RequireRoleLayer},
    db::entities::department,
    response::{ApiResponse, ApiResult},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct DepartmentRequest {
    pub name: String,
    pub description: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let writes = Router::new()
        .route("/departments", post(create_department))
        .route(
            "/departments/{id}",
            patch(update_department).delete(delete_department),
        )
        .layer(RequireRoleLayer::new(Role::Admin));

    let reads = Router::new()
        .route("/departments", get(list_departments))
        .route("/departments/{id}", get(get_department));

    writes
        .merge(reads)
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth))
        .with_state(state)
}

async fn create_department(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DepartmentRequest>,
) -> ApiResult<department::Model> {
    let services = ServiceContext::from_state(state.as_ref());
    let created = services
        .department()
        .create(&body.name, body.description.as_deref())
        .await?;
    ApiResponse::ok(created, "Department created successfully")
}

async fn list_departments(State(state): State<Arc<AppState>>) -> ApiResult<Vec<department::Model>> {
    let services = ServiceContext::from_state(state.as_ref());
    let departments = services.department().list().await?;
    ApiResponse::ok(departments, "Departments retrieved successfully")
}

async fn get_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<department::Model> {
    let services = ServiceContext::from_state(state.as_ref());
    let found = services.department().get(id).await?;
    ApiResponse::ok(found, "Department retrieved successfully")
}

async fn update_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<DepartmentRequest>,
) -> ApiResult<department::Model> {
    let services = ServiceContext::from_state(state.as_ref());
    let updated = services
        .department()
        .update(id, &body.name, body.description.as_deref())
        .await?;
    ApiResponse::ok(updated, "Department updated successfully")
}

async fn delete_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    let services = ServiceContext::from_state(state.as_ref());
    services.department().delete(id).await?;
    ApiResponse::ok(serde_json::Value::Null, "Department deleted successfully")
}
