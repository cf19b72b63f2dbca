use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResponse;

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR)
}

pub fn error(code: StatusCode, error: &'static str) -> Response {
    (code, Json(ApiResponse::error(error))).into_response()
}

pub fn success(message: &'static str) -> Response {
    Json(ApiResponse::success(message)).into_response()
}
