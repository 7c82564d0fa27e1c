//! One-way password hashing and verification on top of bcrypt.
//!
//! The work factor is injected rather than hard-coded: production uses the
//! configured `BCRYPT_COST` while tests run at the bcrypt minimum so the
//! suite stays fast.

use crate::errors::{ServiceError, ServiceResult};

/// Lowest cost bcrypt accepts; only suitable for tests.
pub const MIN_COST: u32 = 4;

pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a password with a fresh random salt. The salt and cost are
    /// embedded in the output, so two calls on the same password produce
    /// different strings that both verify.
    ///
    /// Failure here means the hashing library itself failed (entropy or
    /// parameter problems) and is surfaced as a server error, never as a
    /// credential rejection.
    pub fn hash(&self, password: &str) -> ServiceResult<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| ServiceError::internal_error(format!("password hashing failed: {e}")))
    }

    /// Checks a password against a stored hash using the library's
    /// constant-time comparison. An undecodable stored hash counts as a
    /// non-match rather than an error; there is nothing useful a caller
    /// could do with the difference.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
