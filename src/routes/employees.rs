use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    middleware,
    routing::{get, patch, post},
};

use crate::{
    auth::{Role, jwt::jwt_auth, role_layer::RequireRoleLayer},
    db::entities::employee,
    response::{ApiResponse, ApiResult},
    services::{
        ServiceContext,
        employee::{EmployeeInput, EmployeePatch},
    },
    state::AppState,
};

/// The legacy list path `/getEmployee` is part of the frontend
/// contract and kept as-is.
pub fn router(state: Arc<AppState>) -> Router {
    let writes = Router::new()
        .route("/employee", post(create_employee))
        .route(
            "/employee/{id}",
            patch(update_employee).delete(delete_employee),
        )
        .layer(RequireRoleLayer::any([Role::Admin, Role::Hr]));

    let reads = Router::new()
        .route("/getEmployee", get(list_employees))
        .route("/employee/{id}", get(get_employee));

    writes
        .merge(reads)
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth))
        .with_state(state)
}

async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(body): Json<EmployeeInput>,
) -> ApiResult<employee::Model> {
    let services = ServiceContext::from_state(state.as_ref());
    let created = services.employee().create(body).await?;
    ApiResponse::ok(created, "Employee created successfully")
}

async fn list_employees(State(state): State<Arc<AppState>>) -> ApiResult<Vec<employee::Model>> {
    let services = ServiceContext::from_state(state.as_ref());
    let employees = services.employee().list().await?;
    ApiResponse::ok(employees, "Employees retrieved successfully")
}

async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<employee::Model> {
    let services = ServiceContext::from_state(state.as_ref());
    let found = services.employee().get(id).await?;
    ApiResponse::ok(found, "Employee retrieved successfully")
}

async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<EmployeePatch>,
) -> ApiResult<employee::Model> {
    let services = ServiceContext::from_state(state.as_ref());
    let updated = services.employee().update(id, body).await?;
    ApiResponse::ok(updated, "Employee updated successfully")
}

async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    let services = ServiceContext::from_state(state.as_ref());
    services.employee().delete(id).await?;
    ApiResponse::ok(serde_json::Value::Null, "Employee deleted successfully")
}
