//! HTTP routes for service webhooks.

use crate::api::webhook::handlers::*;
use crate::auth::middleware::require_api_key;
use crate::state::AppState;
use axum::{middleware, routing::post, Router};

/// Creates the webhook router, guarded by the static ApiKey credential.
pub fn webhook_router(state: AppState) -> Router<AppState> {
    Router::new().route(
        "/webhooks",
        post(polka_webhook).route_layer(middleware::from_fn_with_state(state, require_api_key)),
    )
}
