//! Handler functions for the admin surface: the visit counter page and the
//! destructive dev-only reset.

use crate::api::common::{error_response, service_error_to_http};
use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
};
use std::sync::atomic::Ordering;

/// Render the admin metrics page.
#[axum::debug_handler]
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    let hits = state.page_hits.load(Ordering::Relaxed);
    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>"
    ))
}

/// Wipe all users (chirps and refresh tokens cascade) and zero the visit
/// counter. Refused outside the dev platform.
#[axum::debug_handler]
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, (StatusCode, String)> {
    if state.config.platform != "dev" {
        return Err(error_response(StatusCode::FORBIDDEN, "Forbidden"));
    }

    let repo = UserRepository::new(&state.pool);
    if let Err(error) = repo.delete_all_users().await {
        return Err(service_error_to_http(error.into()));
    }

    state.page_hits.store(0, Ordering::Relaxed);
    Ok(StatusCode::OK)
}
