use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{MSG_CAFE_NOT_FOUND, MSG_DUPLICATE_NAME, MSG_NO_CAFE_AT_LOCATION};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cafe not found")]
    CafeNotFound,

    #[error("No cafe at that location")]
    LocationNotFound,

    #[error("A cafe with that name already exists")]
    DuplicateName,
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            AppError::CafeNotFound => (StatusCode::NOT_FOUND, json!({ "error": MSG_CAFE_NOT_FOUND })),
            AppError::LocationNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": { "Not Found": MSG_NO_CAFE_AT_LOCATION } }),
            ),
            AppError::DuplicateName => (StatusCode::CONFLICT, json!({ "error": MSG_DUPLICATE_NAME })),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
