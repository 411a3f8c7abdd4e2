use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every handler returns `Result<_, ApiError>`; the error half renders the
/// same `{success: false, error: ...}` envelope the success half mirrors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400: unparseable path id or request body.
    #[error("{0}")]
    BadInput(String),

    /// 400: unique index collision on email/username.
    #[error("{0}")]
    Constraint(String),

    /// 404: no live row for the requested id.
    #[error("User not found")]
    NotFound,

    /// 500: any other store/driver failure.
    #[error("{0}")]
    Store(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadInput(_) | ApiError::Constraint(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(ErrorBody {
            success: false,
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ApiError::Constraint(db_err.to_string())
            }
            other => ApiError::Store(other.to_string()),
        }
    }
}
