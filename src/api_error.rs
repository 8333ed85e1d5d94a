use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const INVALID_BODY: &str = "Invalid or missing JSON body";
pub const NO_URL: &str = "No URL provided";
pub const PROCESSING_FAILED: &str = "Failed to process URL";
pub const BODY_TOO_LARGE: &str = "Request body too large";

/// Build the `{"error": "..."}` envelope every failed request gets.
pub fn json_error(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(json!({ "error": message })))
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The caller sent something we cannot check.
    #[error("{0}")]
    Validation(&'static str),

    #[error("request body too large")]
    TooLarge,

    /// Evaluation failed on our side. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::TooLarge => {
                json_error(StatusCode::PAYLOAD_TOO_LARGE, BODY_TOO_LARGE).into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!("check failed: {detail}");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_FAILED).into_response()
            }
        }
    }
}
