use crate::{cors, routes, state};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Check requests carry a single URL; anything bigger is rejected by axum.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

pub async fn health() -> &'static str {
    "ok"
}

/// Build the main Axum router.
///
/// - `/` serves the bundled frontend page.
/// - `/health` is a liveness probe.
/// - `/check_phishing` runs the heuristics, behind a body limit.
///
/// Every route answers CORS preflights and allows any origin.
pub fn build_router(state: Arc<state::AppState>) -> Router {
    let api = Router::new()
        .route("/check_phishing", post(routes::check_phishing))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    cors::with_cors(
        Router::new()
            .route("/", get(routes::index))
            .route("/health", get(health))
            .merge(api),
    )
    .with_state(state)
}
