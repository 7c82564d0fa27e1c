//! HTTP routes for chirps.

use crate::api::chirp::handlers::*;
use crate::auth::middleware::require_access_token;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

/// Creates the chirp router. Reads are public; writes require a valid
/// access token.
pub fn chirp_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_chirps))
        .route(
            "/",
            post(create_chirp).route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_access_token,
            )),
        )
        .route("/{chirp_id}", get(get_chirp))
        .route(
            "/{chirp_id}",
            delete(delete_chirp)
                .route_layer(middleware::from_fn_with_state(state, require_access_token)),
        )
}
