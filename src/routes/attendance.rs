use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    middleware,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    auth::{Role, jwt::jwt_auth, role_layer::RequireRoleLayer},
    db::entities::attendance,
    error::AppError,
    response::{ApiResponse, ApiResult},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: String,
}

pub(crate) fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    date.parse()
        .map_err(|_| AppError::validation(format!("Invalid date: {date}")))
}

pub fn router(state: Arc<AppState>) -> Router {
    let privileged = Router::new()
        .route("/attendance/all", get(all_on_date))
        .layer(RequireRoleLayer::any([Role::Admin, Role::Hr]));

    let open = Router::new()
        .route("/attendance/check-in/{id}", post(check_in))
        .route("/attendance/check-out/{id}", post(check_out))
        .route("/attendance/employee/{id}", get(employee_history));

    privileged
        .merge(open)
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth))
        .with_state(state)
}

async fn check_in(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<attendance::Model> {
    let services = ServiceContext::from_state(state.as_ref());
    let record = services.attendance().check_in(id).await?;
    ApiResponse::ok(record, "Clock-in successful")
}

async fn check_out(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<attendance::Model> {
    let services = ServiceContext::from_state(state.as_ref());
    let record = services.attendance().check_out(id).await?;
    ApiResponse::ok(record, "Clock-out successful")
}

async fn employee_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<attendance::Model>> {
    let services = ServiceContext::from_state(state.as_ref());
    let records = services.attendance().history(id).await?;
    ApiResponse::ok(records, "Attendance history retrieved")
}

async fn all_on_date(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Vec<attendance::Model>> {
    let date = parse_date(&query.date)?;
    let services = ServiceContext::from_state(state.as_ref());
    let records = services.attendance().on_date(date).await?;
    ApiResponse::ok(records, "Global attendance retrieved")
}
