//! Central module for application-wide configuration settings.
//!
//! Configuration is loaded from the environment exactly once at startup and
//! handed to the rest of the application as an immutable value; nothing in
//! the codebase re-reads the environment after boot.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    /// Symmetric signing key for access tokens.
    pub jwt_secret: String,
    /// Access token lifetime in seconds.
    pub jwt_expires_in_seconds: u64,
    /// Static key presented by the Polka webhook caller.
    pub polka_api_key: String,
    /// bcrypt work factor for password hashing.
    pub bcrypt_cost: u32,
    /// Deployment platform; destructive admin endpoints only work on "dev".
    pub platform: String,
    pub server_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL not set")?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        let acquire_timeout_seconds = env::var("DB_ACQUIRE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECONDS must be a valid number")?;

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET not set")?;

        let jwt_expires_in_seconds = env::var("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<u64>()
            .context("JWT_EXPIRES_IN_SECONDS must be a valid number")?;

        let polka_api_key = env::var("POLKA_KEY").context("POLKA_KEY not set")?;

        let bcrypt_cost = env::var("BCRYPT_COST")
            .unwrap_or_else(|_| bcrypt::DEFAULT_COST.to_string())
            .parse::<u32>()
            .context("BCRYPT_COST must be a valid number")?;

        let platform = env::var("PLATFORM").unwrap_or_else(|_| "production".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        Ok(Config {
            database_url,
            max_connections,
            acquire_timeout_seconds,
            jwt_secret,
            jwt_expires_in_seconds,
            polka_api_key,
            bcrypt_cost,
            platform,
            server_port,
        })
    }
}
