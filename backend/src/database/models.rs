//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models;
//! in particular `User::hashed_password` must never reach a response body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub is_chirpy_red: bool,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub email: String,
    pub hashed_password: String,
}

#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub id: String,
    pub email: String,
    pub hashed_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Chirp {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct CreateChirp {
    pub id: String,
    pub body: String,
    pub user_id: String,
}

/// Server-side record of a long-lived refresh token. Rows are never deleted;
/// expiry and revocation are both checked at lookup time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefreshToken {
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CreateRefreshToken {
    pub token: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}
