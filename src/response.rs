use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Uniform response envelope. Successful responses are always HTTP 200
/// with `success: true` and no `errorCode`; failures carry the mapped
/// status plus a machine-readable code and a null payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> ApiResult<T> {
        Ok(Self {
            success: true,
            message: message.into(),
            error_code: None,
            data,
        })
    }
}

impl ApiResponse<serde_json::Value> {
    pub fn from_error(err: &AppError) -> Self {
        Self {
            success: false,
            message: err.message(),
            error_code: Some(err.code()),
            data: serde_json::Value::Null,
        }
    }
}

pub fn log_app_error(err: &AppError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), code = err.code(), "request failed: {err}");
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        log_app_error(&self, status);
        (status, Json(ApiResponse::from_error(&self))).into_response()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
