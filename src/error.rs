use axum::http::StatusCode;
use thiserror::Error;

use crate::db::dao::DaoLayerError;

/// Domain error taxonomy. Every variant maps to one HTTP status and one
/// machine-readable code; the mapping lives here so handlers only ever
/// return `AppError` and the envelope stays uniform.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Identity not found for ID: {0}")]
    IdentityNotFound(i64),
    #[error("Already checked in for today")]
    AlreadyCheckedIn,
    #[error("Already checked out for today")]
    AlreadyCheckedOut,
    #[error("No check-in record found for today")]
    NoCheckInFound,
    #[error("Leave request not found with id: {0}")]
    LeaveNotFound(i64),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::IdentityNotFound(_) | Self::LeaveNotFound(_) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::AlreadyCheckedIn
            | Self::AlreadyCheckedOut
            | Self::NoCheckInFound
            | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::IdentityNotFound(_) => "IDENTITY_NOT_FOUND",
            Self::AlreadyCheckedIn | Self::AlreadyCheckedOut | Self::NoCheckInFound => {
                "ATTENDANCE_ERROR"
            }
            Self::LeaveNotFound(_) => "LEAVE_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized(_) => "AUTH_ERROR",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Db(_) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message exposed to clients. Database failures get a fixed text;
    /// the underlying error is only logged.
    pub fn message(&self) -> String {
        match self {
            Self::Db(_) => "An unexpected system error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::Db(db_err) => AppError::Db(db_err),
        }
    }
}
