//! Credential failure taxonomy.
//!
//! Every way a request can fail authentication gets its own variant so the
//! code can match on the cause without comparing message strings. The
//! distinction is internal only: the `From` impl collapses all of them into
//! `ServiceError::Unauthorized`, so a caller probing the API sees one
//! identical rejection regardless of which check failed.

use crate::errors::ServiceError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("authorization header missing")]
    MissingHeader,

    #[error("authorization scheme not recognised")]
    MalformedScheme,

    #[error("no credential after scheme")]
    EmptyCredential,

    #[error("token structurally invalid")]
    MalformedToken,

    #[error("token signature mismatch")]
    SignatureMismatch,

    #[error("token expired")]
    Expired,

    #[error("token issuer mismatch")]
    IssuerMismatch,

    #[error("token subject is not a valid user id")]
    SubjectInvalid,
}

impl From<AuthError> for ServiceError {
    fn from(_: AuthError) -> Self {
        ServiceError::Unauthorized
    }
}
