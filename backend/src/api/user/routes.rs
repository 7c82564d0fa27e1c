//! HTTP routes for user account management.

use crate::api::user::handlers::*;
use crate::auth::middleware::require_access_token;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{post, put},
    Router,
};

/// Creates the user router. Registration is open; updates require a valid
/// access token.
pub fn user_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route(
            "/",
            put(update_user)
                .route_layer(middleware::from_fn_with_state(state, require_access_token)),
        )
}
