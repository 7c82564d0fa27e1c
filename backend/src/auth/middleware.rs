//! Middleware for protecting authenticated routes.
//!
//! `require_access_token` guards user-session endpoints with a bearer access
//! token; `require_api_key` guards the service webhook with the static
//! `ApiKey` credential. Both reject with an identical 401 body no matter
//! which check failed.

use crate::api::common::error_response;
use crate::auth::headers;
use crate::auth::token::TokenCodec;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Authenticated caller, inserted into request extensions for handlers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

fn unauthorized() -> (StatusCode, String) {
    error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
}

/// Bearer access-token authentication middleware. Validation is stateless;
/// no store lookup happens here.
pub async fn require_access_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let token = headers::extract_bearer(request.headers()).map_err(|_| unauthorized())?;

    let codec = TokenCodec::new(&state.config.jwt_secret);
    let user_id = codec.validate(&token).map_err(|_| unauthorized())?;

    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

/// Static API-key authentication middleware for service-to-service calls.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let key = headers::extract_api_key(request.headers()).map_err(|_| unauthorized())?;

    if key.as_bytes() != state.config.polka_api_key.as_bytes() {
        return Err(unauthorized());
    }

    Ok(next.run(request).await)
}
