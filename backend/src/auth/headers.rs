//! `Authorization` header parsing.
//!
//! Two credential schemes share the one header: `Bearer <token>` for access
//! and refresh tokens, and `ApiKey <key>` for the static service-to-service
//! secret. The scheme word disambiguates intent, so both parsers are the
//! same shape with a different literal. The credential is returned verbatim;
//! no decoding happens here.

use crate::auth::errors::AuthError;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

const BEARER_SCHEME: &str = "Bearer";
const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, AuthError> {
    extract_credential(headers, BEARER_SCHEME)
}

/// Extracts the key from an `Authorization: ApiKey <key>` header.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    extract_credential(headers, API_KEY_SCHEME)
}

fn extract_credential(headers: &HeaderMap, scheme: &str) -> Result<String, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if value.is_empty() {
        return Err(AuthError::MissingHeader);
    }

    // Single-space split: a doubled separator leaves an empty second token,
    // which is an empty credential, not a valid one.
    let mut parts = value.split(' ');
    if parts.next() != Some(scheme) {
        return Err(AuthError::MalformedScheme);
    }
    match parts.next() {
        Some("") | None => Err(AuthError::EmptyCredential),
        Some(credential) => Ok(credential.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_with_token() {
        let headers = headers_with("Bearer theGoatOfKeys");
        assert_eq!(extract_bearer(&headers).unwrap(), "theGoatOfKeys");
    }

    #[test]
    fn bearer_missing_header() {
        assert_eq!(
            extract_bearer(&HeaderMap::new()),
            Err(AuthError::MissingHeader)
        );
    }

    #[test]
    fn bearer_scheme_without_token() {
        let headers = headers_with("Bearer");
        assert_eq!(extract_bearer(&headers), Err(AuthError::EmptyCredential));
    }

    #[test]
    fn bearer_doubled_separator_is_an_empty_credential() {
        let headers = headers_with("Bearer  theGoatOfKeys");
        assert_eq!(extract_bearer(&headers), Err(AuthError::EmptyCredential));
    }

    #[test]
    fn bearer_rejects_other_schemes() {
        let headers = headers_with("ApiKey theGoatOfKeys");
        assert_eq!(extract_bearer(&headers), Err(AuthError::MalformedScheme));
    }

    #[test]
    fn api_key_with_key() {
        let headers = headers_with("ApiKey f271c81ff7084ee5b99a5091b42d486e");
        assert_eq!(
            extract_api_key(&headers).unwrap(),
            "f271c81ff7084ee5b99a5091b42d486e"
        );
    }

    #[test]
    fn api_key_missing_header() {
        assert_eq!(
            extract_api_key(&HeaderMap::new()),
            Err(AuthError::MissingHeader)
        );
    }

    #[test]
    fn api_key_scheme_without_key() {
        let headers = headers_with("ApiKey");
        assert_eq!(extract_api_key(&headers), Err(AuthError::EmptyCredential));
    }

    #[test]
    fn api_key_rejects_bearer() {
        let headers = headers_with("Bearer f271c81ff7084ee5b99a5091b42d486e");
        assert_eq!(extract_api_key(&headers), Err(AuthError::MalformedScheme));
    }
}
