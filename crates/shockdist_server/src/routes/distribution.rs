use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

pub fn distribution_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(handlers::health))
        // Precomputed state
        .route("/api/baseline", get(handlers::get_baseline))
        .route("/api/markers", get(handlers::get_markers))
        // Shock pipeline
        .route("/api/distribution", post(handlers::compute_distribution))
        .route("/api/indicators", post(handlers::compute_indicators))
}
