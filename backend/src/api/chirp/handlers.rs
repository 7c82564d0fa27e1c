//! Handler functions for chirp endpoints.

use crate::api::common::service_error_to_http;
use crate::auth::middleware::AuthUser;
use crate::database::models::Chirp;
use crate::services::chirp_service::{ChirpListQuery, ChirpService, CreateChirpRequest};
use crate::state::AppState;
use axum::{
    extract::{Extension, Json, Path, Query, State},
    http::StatusCode,
    response::Json as ResponseJson,
};

/// Handle chirp creation for the authenticated author
#[axum::debug_handler]
pub async fn create_chirp(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(payload): Json<CreateChirpRequest>,
) -> Result<(StatusCode, ResponseJson<Chirp>), (StatusCode, String)> {
    let chirp_service = ChirpService::new(&state.pool);

    match chirp_service.create_chirp(user_id, payload).await {
        Ok(chirp) => Ok((StatusCode::CREATED, ResponseJson(chirp))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// List chirps, optionally filtered by author and sorted by creation time
#[axum::debug_handler]
pub async fn get_chirps(
    State(state): State<AppState>,
    Query(query): Query<ChirpListQuery>,
) -> Result<ResponseJson<Vec<Chirp>>, (StatusCode, String)> {
    let chirp_service = ChirpService::new(&state.pool);

    match chirp_service.get_chirps(query).await {
        Ok(chirps) => Ok(ResponseJson(chirps)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Retrieve a single chirp by id
#[axum::debug_handler]
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<ResponseJson<Chirp>, (StatusCode, String)> {
    let chirp_service = ChirpService::new(&state.pool);

    match chirp_service.get_chirp(&chirp_id).await {
        Ok(chirp) => Ok(ResponseJson(chirp)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Delete a chirp; only its author may do so
#[axum::debug_handler]
pub async fn delete_chirp(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(chirp_id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let chirp_service = ChirpService::new(&state.pool);

    match chirp_service.delete_chirp(user_id, &chirp_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(error) => Err(service_error_to_http(error)),
    }
}
