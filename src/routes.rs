use crate::api_error::{self, ApiError};
use crate::evaluator::{self, CheckResult};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const INDEX_HTML: &str = include_str!("../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Pull a usable URL out of a request body.
///
/// The body is parsed as JSON whatever its content type says.
pub fn url_from_body(body: &[u8]) -> Result<String, ApiError> {
    let v: Value =
        serde_json::from_slice(body).map_err(|_| ApiError::Validation(api_error::INVALID_BODY))?;
    let Value::Object(map) = v else {
        return Err(ApiError::Validation(api_error::INVALID_BODY));
    };

    let url = map
        .get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::Validation(api_error::NO_URL))?;

    Ok(url.to_string())
}

pub async fn check_phishing(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<CheckResult>), ApiError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::TooLarge
        } else {
            ApiError::Validation(api_error::INVALID_BODY)
        }
    })?;
    let url = url_from_body(&body)?;

    let result = tokio::task::spawn_blocking(move || evaluator::evaluate(&state.rules, &url))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    debug!(
        is_phishing = result.is_phishing,
        reasons = result.reasons.len(),
        "url checked"
    );

    Ok((StatusCode::OK, Json(result)))
}
