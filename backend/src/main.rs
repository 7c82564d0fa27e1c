//! Main entry point for the Chirpy backend.
//!
//! This file initializes the Axum web server, sets up the database pool,
//! and registers all API routes and middleware.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;
mod state;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use config::Config;
use database::Database;
use state::AppState;
use std::sync::atomic::Ordering;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    let state = AppState::new(db.pool().clone(), config);

    let api = Router::new()
        .route("/api/healthz", get(readiness))
        .nest("/api/users", api::user::routes::user_router(state.clone()))
        .nest("/api/chirps", api::chirp::routes::chirp_router(state.clone()))
        .nest("/api/polka", api::webhook::routes::webhook_router(state.clone()))
        .merge(auth::routes::auth_router())
        .layer(middleware::from_fn_with_state(state.clone(), track_visits));

    let app = api
        .nest("/admin", api::admin::routes::admin_router())
        .with_state(state.clone());

    let bind_address = format!("0.0.0.0:{}", state.config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting Chirpy server on port {}", state.config.server_port);
    axum::serve(listener, app).await.unwrap();
}

async fn readiness() -> &'static str {
    "OK"
}

/// Counts API traffic for the admin metrics page.
async fn track_visits(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.page_hits.fetch_add(1, Ordering::Relaxed);
    next.run(request).await
}
