//! User business logic service.
//!
//! Handles registration, credential checks, profile updates, and the Polka
//! membership upgrade.

use crate::auth::password::PasswordHasher;
use crate::database::models::{CreateUser, UpdateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

/// Create/update request body shared by `POST` and `PUT /api/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct UserCredentialsRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    hasher: PasswordHasher,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    /// * `bcrypt_cost` - Configured password hashing work factor
    pub fn new(pool: &'a SqlitePool, bcrypt_cost: u32) -> Self {
        Self {
            pool,
            hasher: PasswordHasher::new(bcrypt_cost),
        }
    }

    /// Registers a new user. The plaintext password is hashed immediately
    /// and never stored or logged.
    pub async fn create_user(&self, request: UserCredentialsRequest) -> ServiceResult<User> {
        self.validate_request(&request)?;

        let repo = UserRepository::new(self.pool);
        if repo.email_exists(&request.email).await? {
            return Err(ServiceError::already_exists("User", &request.email));
        }

        let hashed_password = self.hasher.hash(&request.password)?;

        let user = repo
            .create_user(CreateUser {
                id: Uuid::now_v7().to_string(),
                email: request.email,
                hashed_password,
            })
            .await?;

        Ok(user)
    }

    /// Replaces the caller's email and password.
    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: UserCredentialsRequest,
    ) -> ServiceResult<User> {
        self.validate_request(&request)?;

        let repo = UserRepository::new(self.pool);
        let hashed_password = self.hasher.hash(&request.password)?;

        let updated = repo
            .update_user(UpdateUser {
                id: user_id.to_string(),
                email: request.email,
                hashed_password,
            })
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(updated)
    }

    /// Verifies a login credential. An unknown email and a wrong password
    /// return the same unauthorized error.
    pub async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);
        let user = repo
            .get_user_by_email(email)
            .await?
            .ok_or(ServiceError::Unauthorized)?;

        if !self.hasher.verify(password, &user.hashed_password) {
            return Err(ServiceError::Unauthorized);
        }

        Ok(user)
    }

    /// Flags a user as a Chirpy Red member.
    pub async fn upgrade_to_red(&self, user_id: Uuid) -> ServiceResult<()> {
        let repo = UserRepository::new(self.pool);
        if !repo.upgrade_to_red(&user_id.to_string()).await? {
            return Err(ServiceError::not_found("User", user_id.to_string()));
        }
        Ok(())
    }

    fn validate_request(&self, request: &UserCredentialsRequest) -> ServiceResult<()> {
        if let Err(validation_errors) = request.validate() {
            return Err(ServiceError::validation(
                crate::api::common::validation_errors_to_message(validation_errors),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::MIN_COST;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // A single connection keeps every query on the same in-memory db.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn credentials(email: &str) -> UserCredentialsRequest {
        UserCredentialsRequest {
            email: email.to_string(),
            password: "123456".to_string(),
        }
    }

    #[tokio::test]
    async fn upgrade_unknown_user_is_not_found() {
        let pool = test_pool().await;
        let service = UserService::new(&pool, MIN_COST);

        let err = service.upgrade_to_red(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn upgrade_flags_the_member() {
        let pool = test_pool().await;
        let service = UserService::new(&pool, MIN_COST);

        let user = service
            .create_user(credentials("walt@breakingbad.com"))
            .await
            .unwrap();
        assert!(!user.is_chirpy_red);

        service
            .upgrade_to_red(Uuid::parse_str(&user.id).unwrap())
            .await
            .unwrap();

        let upgraded = service
            .authenticate("walt@breakingbad.com", "123456")
            .await
            .unwrap();
        assert!(upgraded.is_chirpy_red);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let pool = test_pool().await;
        let service = UserService::new(&pool, MIN_COST);

        service
            .create_user(credentials("walt@breakingbad.com"))
            .await
            .unwrap();
        let err = service
            .create_user(credentials("walt@breakingbad.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists { .. }));
    }
}
