use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    middleware,
    routing::{get, patch, post},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::{
    auth::{Role, jwt::jwt_auth, role_layer::RequireRoleLayer},
    db::entities::leave_request,
    response::{ApiResponse, ApiResult},
    services::ServiceContext,
    state::AppState,
};

use super::attendance::parse_date;

/// Any status field in the payload is ignored; submissions always
/// open PENDING.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct OptionalDateQuery {
    pub date: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let privileged = Router::new()
        .route("/leaves/{id}/status", patch(update_status))
        .route("/leaves/pending", get(pending))
        .route("/leaves/on-leave", get(on_leave))
        .layer(RequireRoleLayer::any([Role::Admin, Role::Hr]));

    let open = Router::new()
        .route("/leaves/apply/{employee_id}", post(apply))
        .route("/leaves/employee/{id}", get(employee_leaves));

    privileged
        .merge(open)
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth))
        .with_state(state)
}

async fn apply(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<i64>,
    Json(body): Json<LeaveApplication>,
) -> ApiResult<leave_request::Model> {
    let services = ServiceContext::from_state(state.as_ref());
    let created = services
        .leave()
        .apply(employee_id, &body.leave_type, body.start_date, body.end_date)
        .await?;
    ApiResponse::ok(created, "Leave request submitted")
}

async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> ApiResult<leave_request::Model> {
    let services = ServiceContext::from_state(state.as_ref());
    let updated = services.leave().update_status(id, &query.status).await?;
    ApiResponse::ok(updated, "Leave status updated")
}

async fn employee_leaves(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<leave_request::Model>> {
    let services = ServiceContext::from_state(state.as_ref());
    let leaves = services.leave().employee_leaves(id).await?;
    ApiResponse::ok(leaves, "Employee leaves retrieved")
}

async fn pending(State(state): State<Arc<AppState>>) -> ApiResult<Vec<leave_request::Model>> {
    let services = ServiceContext::from_state(state.as_ref());
    let leaves = services.leave().pending().await?;
    ApiResponse::ok(leaves, "Pending leaves retrieved")
}

async fn on_leave(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OptionalDateQuery>,
) -> ApiResult<Vec<leave_request::Model>> {
    let date = match query.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };
    let services = ServiceContext::from_state(state.as_ref());
    let leaves = services.leave().on_leave(date).await?;
    ApiResponse::ok(leaves, "Personnel on leave retrieved")
}
