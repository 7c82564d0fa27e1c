//! Database repository for chirp posts.

use crate::database::models::{Chirp, CreateChirp};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct ChirpRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> ChirpRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new chirp.
    pub async fn create_chirp(&self, chirp: CreateChirp) -> Result<Chirp> {
        let now = Utc::now();
        let chirp = sqlx::query_as::<_, Chirp>(
            r#"
            INSERT INTO chirps (id, created_at, updated_at, body, user_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, created_at, updated_at, body, user_id
            "#,
        )
        .bind(&chirp.id)
        .bind(now)
        .bind(now)
        .bind(&chirp.body)
        .bind(&chirp.user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(chirp)
    }

    /// Retrieves a chirp by id.
    pub async fn get_chirp_by_id(&self, id: &str) -> Result<Option<Chirp>> {
        let chirp = sqlx::query_as::<_, Chirp>(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(chirp)
    }

    /// Lists all chirps in ascending creation order.
    pub async fn get_chirps(&self) -> Result<Vec<Chirp>> {
        let chirps = sqlx::query_as::<_, Chirp>(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(chirps)
    }

    /// Lists one author's chirps in ascending creation order.
    pub async fn get_chirps_by_user_id(&self, user_id: &str) -> Result<Vec<Chirp>> {
        let chirps = sqlx::query_as::<_, Chirp>(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps WHERE user_id = ?1 ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(chirps)
    }

    /// Deletes a chirp.
    pub async fn delete_chirp(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM chirps WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
