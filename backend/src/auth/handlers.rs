//! Handler functions for authentication-related API endpoints.
//!
//! These functions process login, token refresh, and token revocation
//! requests, parse credentials out of the request, and defer to
//! `auth::service` for the core business logic.

use crate::api::common::service_error_to_http;
use crate::auth::headers;
use crate::auth::models::{LoginRequest, LoginResponse, RefreshResponse};
use crate::auth::service::AuthService;
use crate::state::AppState;
use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
    response::Json as ResponseJson,
};

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<LoginResponse>, (StatusCode, String)> {
    let auth_service = AuthService::new(&state.pool, &state.config);

    match auth_service.login(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle token refresh request. The bearer credential here is the opaque
/// refresh token, not an access token.
#[axum::debug_handler]
pub async fn refresh(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> Result<ResponseJson<RefreshResponse>, (StatusCode, String)> {
    let refresh_token = headers::extract_bearer(&request_headers)
        .map_err(|error| service_error_to_http(error.into()))?;

    let auth_service = AuthService::new(&state.pool, &state.config);

    match auth_service.refresh(&refresh_token).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle refresh token revocation. Success is 204 with an empty body.
#[axum::debug_handler]
pub async fn revoke(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> Result<StatusCode, (StatusCode, String)> {
    let refresh_token = headers::extract_bearer(&request_headers)
        .map_err(|error| service_error_to_http(error.into()))?;

    let auth_service = AuthService::new(&state.pool, &state.config);

    match auth_service.revoke(&refresh_token).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(error) => Err(service_error_to_http(error)),
    }
}
