//! Defines the HTTP routes specifically for authentication.
//!
//! These handle login and the refresh-token lifecycle, and are merged into
//! the main Axum router under `/api`.

use crate::auth::handlers::*;
use crate::state::AppState;
use axum::{routing::post, Router};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/refresh", post(refresh))
        .route("/api/revoke", post(revoke))
}
