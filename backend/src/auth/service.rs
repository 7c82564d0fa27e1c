//! Core business logic for the authentication system.
//!
//! Login verifies the password, mints both session tokens, and persists the
//! refresh token. Redemption and revocation operate on the stored record;
//! access tokens themselves are never looked up server-side and stay valid
//! until their own expiry even after the paired refresh token is revoked.

use crate::auth::models::{LoginRequest, LoginResponse, RefreshResponse};
use crate::auth::refresh::RefreshTokenIssuer;
use crate::auth::token::TokenCodec;
use crate::config::Config;
use crate::database::models::CreateRefreshToken;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::refresh_token_repository::RefreshTokenRepository;
use crate::services::user_service::UserService;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

/// Refresh tokens outlive access tokens by design: 60 days from issue.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 60;

pub struct AuthService<'a> {
    pool: &'a SqlitePool,
    config: &'a Config,
    codec: TokenCodec,
    refresh_issuer: RefreshTokenIssuer,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    pub fn new(pool: &'a SqlitePool, config: &'a Config) -> Self {
        Self {
            pool,
            config,
            codec: TokenCodec::new(&config.jwt_secret),
            refresh_issuer: RefreshTokenIssuer::new(),
        }
    }

    fn access_token_ttl(&self) -> Duration {
        Duration::seconds(self.config.jwt_expires_in_seconds as i64)
    }

    /// Authenticates a user and hands out both legs of the session: a
    /// short-lived access token and a persisted long-lived refresh token.
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        if let Err(validation_errors) = request.validate() {
            return Err(ServiceError::validation(
                crate::api::common::validation_errors_to_message(validation_errors),
            ));
        }

        let user_service = UserService::new(self.pool, self.config.bcrypt_cost);
        let user = user_service
            .authenticate(&request.email, &request.password)
            .await?;

        let user_id = Uuid::parse_str(&user.id)
            .map_err(|_| ServiceError::internal_error("stored user id is not a UUID"))?;

        let access_token = self.codec.issue(user_id, self.access_token_ttl())?;
        let refresh_token = self.refresh_issuer.generate()?;

        let repo = RefreshTokenRepository::new(self.pool);
        repo.create_refresh_token(CreateRefreshToken {
            token: refresh_token.clone(),
            user_id: user.id.clone(),
            expires_at: Utc::now() + Duration::days(REFRESH_TOKEN_TTL_DAYS),
        })
        .await?;

        Ok(LoginResponse {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
            token: access_token,
            refresh_token,
        })
    }

    /// Redeems a refresh token for a new access token. The refresh token is
    /// not rotated: the same one keeps working until it expires or is
    /// revoked. Unknown, revoked, and expired tokens are all the same
    /// unauthorized outcome.
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<RefreshResponse> {
        let repo = RefreshTokenRepository::new(self.pool);
        let record = repo
            .get_by_token(refresh_token)
            .await?
            .ok_or(ServiceError::Unauthorized)?;

        if record.revoked_at.is_some() {
            return Err(ServiceError::Unauthorized);
        }
        if Utc::now() >= record.expires_at {
            return Err(ServiceError::Unauthorized);
        }

        let user_id = Uuid::parse_str(&record.user_id)
            .map_err(|_| ServiceError::internal_error("stored user id is not a UUID"))?;

        let token = self.codec.issue(user_id, self.access_token_ttl())?;
        Ok(RefreshResponse { token })
    }

    /// Revokes a refresh token. Idempotent; already-revoked and unknown
    /// tokens succeed silently.
    pub async fn revoke(&self, refresh_token: &str) -> ServiceResult<()> {
        let repo = RefreshTokenRepository::new(self.pool);
        repo.revoke(refresh_token, Utc::now()).await?;
        Ok(())
    }
}
