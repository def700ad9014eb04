//! Error type returned by the directory endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("no company is listed under ticker {0}")]
    UnknownTicker(String),

    #[error("invalid range for {field}: min {min} exceeds max {max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("pagination limit must be at least 1")]
    ZeroPageLimit,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::UnknownTicker { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ZeroPageLimit => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (status, self.to_string()).into_response()
    }
}
