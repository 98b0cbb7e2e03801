// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{score, stats},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires the two endpoints (save-score, quiz-stats).
/// * Applies global middleware (Trace, open CORS).
/// * Injects global state (score store + config).
pub fn create_router(state: AppState) -> Router {
    // Scores are submitted from arbitrary embedding sites, so the policy
    // is any-origin by design.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/save-score",
            post(score::save_score).options(score::preflight),
        )
        .route("/quiz-stats", get(stats::quiz_stats))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
