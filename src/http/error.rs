//! HTTP adapter mapping for user errors.
//!
//! Keeps [`UserError`] HTTP-agnostic while giving handlers consistent status
//! codes. Not-found answers carry no body; the other failures return a small
//! JSON object with a machine-readable `code`.

use crate::model::DepartmentId;
use crate::user_store::UserError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures a `/users` handler can answer with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("unknown department: {0}")]
    UnknownDepartment(DepartmentId),
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body of non-404 error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound,
            UserError::UnknownDepartment(id) => ApiError::UnknownDepartment(id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::UnknownDepartment(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::NotFound => return HttpResponse::NotFound().finish(),
            ApiError::UnknownDepartment(id) => ErrorBody {
                code: "unknown_department".into(),
                message: format!("department {id} does not exist"),
            },
            ApiError::Internal(detail) => {
                // Do not leak store details to clients.
                error!(error = %detail, "request failed");
                ErrorBody {
                    code: "internal_error".into(),
                    message: "Internal server error".into(),
                }
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
