//! HTTP routes for the admin surface.

use crate::api::admin::handlers::*;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the admin router.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(metrics))
        .route("/reset", post(reset))
}
