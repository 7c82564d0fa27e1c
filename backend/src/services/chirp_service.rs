//! Chirp business logic service.
//!
//! Enforces the length limit, cleans disallowed words, and owns the
//! list/sort and author-only delete rules.

use crate::database::models::{Chirp, CreateChirp};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::chirp_repository::ChirpRepository;
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

const MAX_CHIRP_LENGTH: usize = 140;
const BAD_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// Query parameters for listing chirps.
#[derive(Debug, Default, Deserialize)]
pub struct ChirpListQuery {
    pub author_id: Option<String>,
    pub sort: Option<String>,
}

pub struct ChirpService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> ChirpService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a chirp for the authenticated author.
    pub async fn create_chirp(
        &self,
        author_id: Uuid,
        request: CreateChirpRequest,
    ) -> ServiceResult<Chirp> {
        if request.body.len() > MAX_CHIRP_LENGTH {
            return Err(ServiceError::validation("Chirp is too long"));
        }

        let repo = ChirpRepository::new(self.pool);
        let chirp = repo
            .create_chirp(CreateChirp {
                id: Uuid::now_v7().to_string(),
                body: clean_body(&request.body),
                user_id: author_id.to_string(),
            })
            .await?;

        Ok(chirp)
    }

    /// Lists chirps, optionally filtered by author and re-sorted.
    pub async fn get_chirps(&self, query: ChirpListQuery) -> ServiceResult<Vec<Chirp>> {
        let repo = ChirpRepository::new(self.pool);

        let mut chirps = match query.author_id {
            Some(author_id) => {
                let author_id = Uuid::parse_str(&author_id)
                    .map_err(|_| ServiceError::validation("author_id must be a valid UUID"))?;
                repo.get_chirps_by_user_id(&author_id.to_string()).await?
            }
            None => repo.get_chirps().await?,
        };

        if query.sort.as_deref() == Some("desc") {
            chirps.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }

        Ok(chirps)
    }

    /// Retrieves a single chirp.
    pub async fn get_chirp(&self, chirp_id: &str) -> ServiceResult<Chirp> {
        let repo = ChirpRepository::new(self.pool);
        repo.get_chirp_by_id(chirp_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Chirp", chirp_id))
    }

    /// Deletes a chirp, but only for its author.
    pub async fn delete_chirp(&self, caller: Uuid, chirp_id: &str) -> ServiceResult<()> {
        let repo = ChirpRepository::new(self.pool);
        let chirp = repo
            .get_chirp_by_id(chirp_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Chirp", chirp_id))?;

        if chirp.user_id != caller.to_string() {
            return Err(ServiceError::permission_denied(
                "Only the author can delete a chirp",
            ));
        }

        repo.delete_chirp(chirp_id).await?;
        Ok(())
    }
}

/// Replaces disallowed words with `****`. Matching is case-insensitive but
/// whole-word only: punctuation attached to a word defeats the filter.
fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if BAD_WORDS.contains(&word.to_lowercase().as_str()) {
                "****"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::MIN_COST;
    use crate::services::user_service::{UserCredentialsRequest, UserService};
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

    async fn register(pool: &SqlitePool, email: &str) -> Uuid {
        let user = UserService::new(pool, MIN_COST)
            .create_user(UserCredentialsRequest {
                email: email.to_string(),
                password: "123456".to_string(),
            })
            .await
            .unwrap();
        Uuid::parse_str(&user.id).unwrap()
    }

    #[tokio::test]
    async fn rejects_chirp_over_140_chars() {
        let pool = test_pool().await;
        let author = register(&pool, "walt@breakingbad.com").await;
        let service = ChirpService::new(&pool);

        let err = service
            .create_chirp(
                author,
                CreateChirpRequest {
                    body: "a".repeat(141),
                },
            )
            .await
            .unwrap_err();
        match err {
            ServiceError::Validation { message } => assert_eq!(message, "Chirp is too long"),
            other => panic!("expected validation error, got {other:?}"),
        }

        // Exactly 140 characters is still fine.
        let chirp = service
            .create_chirp(
                author,
                CreateChirpRequest {
                    body: "a".repeat(140),
                },
            )
            .await
            .unwrap();
        assert_eq!(chirp.body.len(), 140);
    }

    #[tokio::test]
    async fn only_the_author_can_delete() {
        let pool = test_pool().await;
        let author = register(&pool, "walt@breakingbad.com").await;
        let stranger = register(&pool, "jesse@breakingbad.com").await;
        let service = ChirpService::new(&pool);

        let chirp = service
            .create_chirp(
                author,
                CreateChirpRequest {
                    body: "I am the one who chirps".to_string(),
                },
            )
            .await
            .unwrap();

        let err = service.delete_chirp(stranger, &chirp.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::PermissionDenied { .. }));

        // The chirp survived the failed delete; the author can remove it.
        service.get_chirp(&chirp.id).await.unwrap();
        service.delete_chirp(author, &chirp.id).await.unwrap();
        let err = service.get_chirp(&chirp.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_unknown_chirp_is_not_found() {
        let pool = test_pool().await;
        let author = register(&pool, "walt@breakingbad.com").await;
        let service = ChirpService::new(&pool);

        let err = service
            .delete_chirp(author, &Uuid::now_v7().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[test]
    fn clean_body_replaces_bad_words() {
        assert_eq!(
            clean_body("This is a kerfuffle opinion I need to share with the world"),
            "This is a **** opinion I need to share with the world"
        );
    }

    #[test]
    fn clean_body_is_case_insensitive() {
        assert_eq!(
            clean_body("Sharbert I hate you Fornax"),
            "**** I hate you ****"
        );
    }

    #[test]
    fn clean_body_ignores_punctuated_words() {
        assert_eq!(clean_body("I hear Mastodon is better than Chirpy. sharbert I need to migrate"),
            "I hear Mastodon is better than Chirpy. **** I need to migrate");
        assert_eq!(clean_body("Sharbert!"), "Sharbert!");
    }

    #[test]
    fn clean_body_leaves_clean_text_alone() {
        assert_eq!(clean_body("Hello, world"), "Hello, world");
    }
}
