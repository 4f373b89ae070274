use std::sync::Arc;

use axum::{Router, extract::State, middleware, routing::get};

use crate::{
    auth::{Claims, Role, jwt::jwt_auth},
    response::{ApiResponse, ApiResult},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard/stats", get(stats))
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth))
        .with_state(state)
}

/// One route, two views: ADMIN and HR get the company-wide numbers,
/// everyone else their own.
async fn stats(
    State(state): State<Arc<AppState>>,
    claims: Claims,
) -> ApiResult<serde_json::Value> {
    let services = ServiceContext::from_state(state.as_ref());
    let dashboard = services.dashboard();

    let data = if claims.has_any(&[Role::Admin, Role::Hr]) {
        dashboard.admin_stats().await?
    } else {
        dashboard.self_stats(&claims.sub).await?
    };
    ApiResponse::ok(data, "Dashboard stats retrieved")
}
