use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;

use crate::{
    response::{ApiResponse, ApiResult},
    services::{ServiceContext, auth::LoginData},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .with_state(state)
}

async fn signup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignupRequest>,
) -> ApiResult<&'static str> {
    let services = ServiceContext::from_state(state.as_ref());
    let message = services
        .auth(&state.jwt)
        .register(
            &body.username,
            &body.email,
            &body.password,
            body.role.as_deref(),
        )
        .await?;
    ApiResponse::ok(message, "Registration successful")
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<LoginData> {
    let services = ServiceContext::from_state(state.as_ref());
    let data = services
        .auth(&state.jwt)
        .login(&body.email, &body.password)
        .await?;
    ApiResponse::ok(data, "Login successful")
}
