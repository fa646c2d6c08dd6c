use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum EcopointsError {
    /// Detail lookup on an id that has no point row.
    #[error("Point not found")]
    PointNotFound,

    /// Any failure inside the registration transaction. The transaction is
    /// already rolled back by the time this surfaces.
    #[error("failed to register point: {0}")]
    WriteFailed(#[source] sqlx::Error),

    /// Connectivity/query failure on a read path.
    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl IntoResponse for EcopointsError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            EcopointsError::PointNotFound => StatusCode::NOT_FOUND,
            // The underlying store message is exposed in the body. Fine for
            // an internal tool; revisit before exposing this publicly.
            EcopointsError::WriteFailed(_) | EcopointsError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// JSON error payload, `{"message": "..."}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}
