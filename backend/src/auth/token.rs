//! Signed access-token codec.
//!
//! Issues and validates short-lived HS256 tokens whose subject is the
//! authenticated user's id. Validation is stateless: signature, issuer,
//! expiry, and subject are all checked from the token itself, with no store
//! lookup. The current time comes from an injected [`Clock`] so that expiry
//! boundaries can be tested without sleeping; the library's own expiry check
//! is disabled in favour of that clock (and of an exclusive bound: a token
//! is already invalid at its exact expiry instant).

use crate::auth::errors::AuthError;
use crate::errors::{ServiceError, ServiceResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed issuer claim; tokens minted by anyone else are rejected.
pub const TOKEN_ISSUER: &str = "chirpy";

/// Time source for token issue and expiry checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock reading the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    iss: String,
    sub: String,
    iat: i64,
    exp: i64,
}

pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Box<dyn Clock>,
}

impl TokenCodec {
    pub fn new(secret: &str) -> Self {
        Self::with_clock(secret, Box::new(SystemClock))
    }

    pub fn with_clock(secret: &str, clock: Box<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the injected clock instead, with no
        // leeway and an exclusive bound.
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
        }
    }

    /// Mints a signed token for `user_id` expiring `ttl` from now.
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> ServiceResult<String> {
        let now = self.clock.now();
        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("token signing failed: {e}")))
    }

    /// Verifies signature, issuer, expiry, and subject, returning the user
    /// id the token was issued for. Each rejection reason is a distinct
    /// [`AuthError`] variant; callers collapse them to one 401.
    pub fn validate(&self, token: &str) -> Result<Uuid, AuthError> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => AuthError::SignatureMismatch,
                    _ => AuthError::MalformedToken,
                }
            })?;

        let claims = data.claims;
        if claims.iss != TOKEN_ISSUER {
            return Err(AuthError::IssuerMismatch);
        }
        if self.clock.now().timestamp() >= claims.exp {
            return Err(AuthError::Expired);
        }
        Uuid::parse_str(&claims.sub).map_err(|_| AuthError::SubjectInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SECRET: &str = "my secret";

    struct ManualClock(DateTime<Utc>);

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn codec_at(secret: &str, at: DateTime<Utc>) -> TokenCodec {
        TokenCodec::with_clock(secret, Box::new(ManualClock(at)))
    }

    #[test]
    fn issue_then_validate_roundtrips() {
        let user_id = Uuid::now_v7();
        let codec = codec_at(SECRET, epoch());
        let token = codec.issue(user_id, Duration::seconds(60)).unwrap();
        assert_eq!(codec.validate(&token).unwrap(), user_id);
    }

    #[test]
    fn rejects_wrong_secret() {
        let signer = codec_at("otherSecret", epoch());
        let token = signer.issue(Uuid::now_v7(), Duration::seconds(60)).unwrap();
        let verifier = codec_at(SECRET, epoch());
        assert_eq!(
            verifier.validate(&token),
            Err(AuthError::SignatureMismatch)
        );
    }

    #[test]
    fn expiry_bound_is_exclusive() {
        let codec = codec_at(SECRET, epoch());
        let token = codec.issue(Uuid::now_v7(), Duration::seconds(60)).unwrap();

        // One second before expiry the token is still good.
        let just_before = codec_at(SECRET, epoch() + Duration::seconds(59));
        assert!(just_before.validate(&token).is_ok());

        // At the exact expiry instant it is already invalid.
        let at_expiry = codec_at(SECRET, epoch() + Duration::seconds(60));
        assert_eq!(at_expiry.validate(&token), Err(AuthError::Expired));
    }

    #[test]
    fn rejects_truncated_token() {
        let codec = codec_at(SECRET, epoch());
        let token = codec.issue(Uuid::now_v7(), Duration::seconds(60)).unwrap();
        let truncated = token.rsplit_once('.').unwrap().0;
        assert_eq!(
            codec.validate(truncated),
            Err(AuthError::MalformedToken)
        );
    }

    #[test]
    fn rejects_foreign_issuer() {
        let claims = Claims {
            iss: "not-chirpy".to_string(),
            sub: Uuid::now_v7().to_string(),
            iat: epoch().timestamp(),
            exp: (epoch() + Duration::seconds(60)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let codec = codec_at(SECRET, epoch());
        assert_eq!(codec.validate(&token), Err(AuthError::IssuerMismatch));
    }

    #[test]
    fn rejects_non_uuid_subject() {
        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: "theGoatOfKeys".to_string(),
            iat: epoch().timestamp(),
            exp: (epoch() + Duration::seconds(60)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let codec = codec_at(SECRET, epoch());
        assert_eq!(codec.validate(&token), Err(AuthError::SubjectInvalid));
    }
}
