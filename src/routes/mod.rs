use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::AppConfig,
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod leaves;

pub const API_PREFIX: &str = "/api";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().nest(
        API_PREFIX,
        Router::new()
            .merge(auth::router(state.clone()))
            .merge(employees::router(state.clone()))
            .merge(departments::router(state.clone()))
            .merge(attendance::router(state.clone()))
            .merge(leaves::router(state.clone()))
            .merge(dashboard::router(state)),
    )
}

/// Full application stack: routes plus the cross-cutting layers, in
/// the same shape tests exercise.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .merge(router(state))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(catch_panic_layer())
}

/// Browser clients send credentialed requests, so origins must be
/// listed explicitly; wildcards are rejected by tower-http in that
/// combination.
fn cors_layer(cfg: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::AUTHORIZATION])
        .allow_credentials(true)
}
