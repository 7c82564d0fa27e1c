//! Opaque refresh-token generation.
//!
//! A refresh token is 32 bytes from a cryptographically secure source,
//! hex-encoded to 64 characters. The byte source is injected so tests can
//! pin it; the default reads the OS entropy pool and a read failure is a
//! server error for the calling request, never a fallback to a weaker
//! source.

use crate::errors::{ServiceError, ServiceResult};
use rand::rngs::OsRng;
use rand::RngCore;

pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Source of cryptographically secure random bytes.
pub trait RandomSource: Send + Sync {
    fn fill(&self, buf: &mut [u8]) -> anyhow::Result<()>;
}

/// Production source backed by the operating system RNG.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> anyhow::Result<()> {
        OsRng.try_fill_bytes(buf)?;
        Ok(())
    }
}

pub struct RefreshTokenIssuer {
    source: Box<dyn RandomSource>,
}

impl RefreshTokenIssuer {
    pub fn new() -> Self {
        Self::with_source(Box::new(OsRandom))
    }

    pub fn with_source(source: Box<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// Draws a fresh unguessable token. 256 bits of entropy make collisions
    /// with any previously issued token negligible.
    pub fn generate(&self) -> ServiceResult<String> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        self.source
            .fill(&mut bytes)
            .map_err(|e| ServiceError::internal_error(format!("random source failure: {e}")))?;
        Ok(hex::encode(bytes))
    }
}

impl Default for RefreshTokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tokens_are_64_hex_chars() {
        let token = RefreshTokenIssuer::new().generate().unwrap();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_do_not_repeat() {
        let issuer = RefreshTokenIssuer::new();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(issuer.generate().unwrap()));
        }
    }

    #[test]
    fn encodes_injected_bytes() {
        struct Fixed;
        impl RandomSource for Fixed {
            fn fill(&self, buf: &mut [u8]) -> anyhow::Result<()> {
                buf.fill(0xab);
                Ok(())
            }
        }

        let issuer = RefreshTokenIssuer::with_source(Box::new(Fixed));
        assert_eq!(issuer.generate().unwrap(), "ab".repeat(32));
    }

    #[test]
    fn source_failure_is_a_server_error() {
        struct Broken;
        impl RandomSource for Broken {
            fn fill(&self, _: &mut [u8]) -> anyhow::Result<()> {
                anyhow::bail!("entropy pool unavailable")
            }
        }

        let issuer = RefreshTokenIssuer::with_source(Box::new(Broken));
        assert!(matches!(
            issuer.generate(),
            Err(ServiceError::InternalError { .. })
        ));
    }
}
