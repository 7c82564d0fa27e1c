//! Database repository for user management operations.
//!
//! Provides CRUD operations for registered users.

use crate::database::models::{CreateUser, UpdateUser, User};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database.
    ///
    /// # Arguments
    /// * `user` - CreateUser DTO containing email and password hash
    ///
    /// # Returns
    /// The newly created User with all fields populated
    pub async fn create_user(&self, user: CreateUser) -> Result<User> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, created_at, updated_at, email, hashed_password, is_chirpy_red)
            VALUES (?1, ?2, ?3, ?4, ?5, 0)
            RETURNING id, created_at, updated_at, email, hashed_password, is_chirpy_red
            "#,
        )
        .bind(&user.id)
        .bind(now)
        .bind(now)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by their email.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, created_at, updated_at, email, hashed_password, is_chirpy_red
            FROM users WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Checks if an email is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?1")
            .bind(email)
            .fetch_one(self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Replaces a user's email and password hash.
    ///
    /// # Returns
    /// The updated User, or `None` if no such user exists
    pub async fn update_user(&self, user: UpdateUser) -> Result<Option<User>> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = ?1, hashed_password = ?2, updated_at = ?3
            WHERE id = ?4
            RETURNING id, created_at, updated_at, email, hashed_password, is_chirpy_red
            "#,
        )
        .bind(&user.email)
        .bind(&user.hashed_password)
        .bind(Utc::now())
        .bind(&user.id)
        .fetch_optional(self.pool)
        .await?;

        Ok(updated)
    }

    /// Flags a user as a Chirpy Red member.
    ///
    /// # Returns
    /// `true` if a row was updated, `false` if the user is unknown
    pub async fn upgrade_to_red(&self, id: &str) -> Result<bool> {
        let result =
            sqlx::query("UPDATE users SET is_chirpy_red = 1, updated_at = ?1 WHERE id = ?2")
                .bind(Utc::now())
                .bind(id)
                .execute(self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes every user. Chirps and refresh tokens cascade.
    pub async fn delete_all_users(&self) -> Result<()> {
        sqlx::query("DELETE FROM users").execute(self.pool).await?;
        Ok(())
    }
}
