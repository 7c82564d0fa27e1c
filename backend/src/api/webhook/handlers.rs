//! Handler functions for the Polka payment webhook.
//!
//! The ApiKey check happens in `auth::middleware::require_api_key` before
//! this handler runs.

use crate::api::common::service_error_to_http;
use crate::services::user_service::UserService;
use crate::state::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

const USER_UPGRADED_EVENT: &str = "user.upgraded";

#[derive(Debug, Deserialize)]
pub struct PolkaEvent {
    pub event: String,
    pub data: PolkaEventData,
}

#[derive(Debug, Deserialize)]
pub struct PolkaEventData {
    pub user_id: Uuid,
}

/// Handle a Polka event. Only `user.upgraded` does anything; every other
/// event is acknowledged and dropped.
#[axum::debug_handler]
pub async fn polka_webhook(
    State(state): State<AppState>,
    Json(payload): Json<PolkaEvent>,
) -> Result<StatusCode, (StatusCode, String)> {
    if payload.event != USER_UPGRADED_EVENT {
        return Ok(StatusCode::NO_CONTENT);
    }

    let user_service = UserService::new(&state.pool, state.config.bcrypt_cost);

    match user_service.upgrade_to_red(payload.data.user_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(error) => Err(service_error_to_http(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::MIN_COST;
    use crate::config::Config;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_state() -> AppState {
        // A single connection keeps every query on the same in-memory db.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 3,
            jwt_secret: "my secret".to_string(),
            jwt_expires_in_seconds: 3600,
            polka_api_key: "f271c81ff7084ee5b99a5091b42d486e".to_string(),
            bcrypt_cost: MIN_COST,
            platform: "dev".to_string(),
            server_port: 8080,
        };
        AppState::new(pool, config)
    }

    #[tokio::test]
    async fn unknown_events_are_acknowledged_and_dropped() {
        let state = test_state().await;
        let status = polka_webhook(
            State(state),
            Json(PolkaEvent {
                event: "user.downgraded".to_string(),
                data: PolkaEventData {
                    user_id: Uuid::now_v7(),
                },
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn upgrade_for_unknown_user_is_not_found() {
        let state = test_state().await;
        let (status, _) = polka_webhook(
            State(state),
            Json(PolkaEvent {
                event: USER_UPGRADED_EVENT.to_string(),
                data: PolkaEventData {
                    user_id: Uuid::now_v7(),
                },
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
