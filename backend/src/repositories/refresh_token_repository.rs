//! Database repository for refresh-token session records.
//!
//! Tokens are keyed by their value. Rows are never deleted: revocation
//! writes `revoked_at` and redemption checks expiry and revocation at
//! lookup time. The single-statement revoke delegates any revoke/redeem
//! race to SQLite's write serialization.

use crate::database::models::{CreateRefreshToken, RefreshToken};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct RefreshTokenRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> RefreshTokenRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persists a freshly issued refresh token for a user.
    pub async fn create_refresh_token(&self, token: CreateRefreshToken) -> Result<RefreshToken> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, RefreshToken>(
            r#"
            INSERT INTO refresh_tokens (token, created_at, updated_at, user_id, expires_at, revoked_at)
            VALUES (?1, ?2, ?3, ?4, ?5, NULL)
            RETURNING token, created_at, updated_at, user_id, expires_at, revoked_at
            "#,
        )
        .bind(&token.token)
        .bind(now)
        .bind(now)
        .bind(&token.user_id)
        .bind(token.expires_at)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    /// Looks up a refresh token by its value.
    pub async fn get_by_token(&self, token: &str) -> Result<Option<RefreshToken>> {
        let record = sqlx::query_as::<_, RefreshToken>(
            r#"
            SELECT token, created_at, updated_at, user_id, expires_at, revoked_at
            FROM refresh_tokens WHERE token = ?1
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }

    /// Marks a refresh token revoked. Idempotent: revoking an unknown or
    /// already-revoked token simply updates zero or one rows.
    pub async fn revoke(&self, token: &str, at: DateTime<Utc>) -> Result<()> {
        sqlx::query(
            "UPDATE refresh_tokens SET revoked_at = ?1, updated_at = ?2 WHERE token = ?3",
        )
        .bind(at)
        .bind(at)
        .bind(token)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
