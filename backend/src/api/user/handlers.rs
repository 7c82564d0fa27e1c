//! Handler functions for user account endpoints.

use crate::api::common::service_error_to_http;
use crate::auth::middleware::AuthUser;
use crate::database::models::User;
use crate::services::user_service::{UserCredentialsRequest, UserService};
use crate::state::AppState;
use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
    response::Json as ResponseJson,
};

/// Handle user registration request
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserCredentialsRequest>,
) -> Result<(StatusCode, ResponseJson<User>), (StatusCode, String)> {
    let user_service = UserService::new(&state.pool, state.config.bcrypt_cost);

    match user_service.create_user(payload).await {
        Ok(user) => Ok((StatusCode::CREATED, ResponseJson(user))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle credential update for the authenticated user
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(payload): Json<UserCredentialsRequest>,
) -> Result<ResponseJson<User>, (StatusCode, String)> {
    let user_service = UserService::new(&state.pool, state.config.bcrypt_cost);

    match user_service.update_user(user_id, payload).await {
        Ok(user) => Ok(ResponseJson(user)),
        Err(error) => Err(service_error_to_http(error)),
    }
}
