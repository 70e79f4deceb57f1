//! `Authorization: ApiKey <key>` parsing.
//!
//! Both functions are pure: they only borrow their input and never log.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::error::AuthError;

/// Scheme token expected in front of the key. Matched case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the API key from request headers.
///
/// Looks up `Authorization` (case-insensitively, as `HeaderMap` does) and
/// returns everything after `ApiKey ` verbatim. When the header repeats,
/// the first value wins.
///
/// # Errors
///
/// - [`AuthError::MissingAuthHeader`] if the header is absent or empty.
/// - [`AuthError::MalformedAuthHeader`] if it is not `ApiKey <key>`, or
///   is not visible ASCII.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::MissingAuthHeader),
    };

    let value = value
        .to_str()
        .map_err(|_| AuthError::MalformedAuthHeader)?;

    parse_authorization(value)
}

/// Split a raw `Authorization` value into scheme and key.
///
/// Only the first space separates; the rest of the value is the key,
/// untouched. For header containers that do their own name lookup.
///
/// # Errors
///
/// Returns [`AuthError::MalformedAuthHeader`] when there is no space or
/// the scheme is not exactly `ApiKey`.
pub fn parse_authorization(value: &str) -> Result<&str, AuthError> {
    let (scheme, key) = value
        .split_once(' ')
        .ok_or(AuthError::MalformedAuthHeader)?;

    if scheme != API_KEY_SCHEME {
        return Err(AuthError::MalformedAuthHeader);
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_get_api_key_success() {
        let headers = headers_with("ApiKey test-key");
        assert_eq!(get_api_key(&headers), Ok("test-key"));
    }

    #[test]
    fn test_get_api_key_no_header() {
        let headers = HeaderMap::new();
        assert_eq!(get_api_key(&headers), Err(AuthError::MissingAuthHeader));
    }

    #[test]
    fn test_get_api_key_empty_header() {
        let headers = headers_with("");
        assert_eq!(get_api_key(&headers), Err(AuthError::MissingAuthHeader));
    }

    #[test]
    fn test_get_api_key_bearer_scheme() {
        let headers = headers_with("Bearer test-key");
        assert_eq!(get_api_key(&headers), Err(AuthError::MalformedAuthHeader));
    }

    #[test]
    fn test_get_api_key_scheme_without_key() {
        let headers = headers_with("ApiKey");
        assert_eq!(get_api_key(&headers), Err(AuthError::MalformedAuthHeader));
    }

    #[test]
    fn test_get_api_key_keeps_spaces_in_key() {
        let headers = headers_with("ApiKey a b c");
        assert_eq!(get_api_key(&headers), Ok("a b c"));
    }

    #[test]
    fn test_get_api_key_scheme_is_case_sensitive() {
        for value in ["apikey test-key", "APIKEY test-key", "Apikey test-key"] {
            let headers = headers_with(value);
            assert_eq!(
                get_api_key(&headers),
                Err(AuthError::MalformedAuthHeader),
                "'{value}' should be rejected"
            );
        }
    }

    #[test]
    fn test_get_api_key_leading_space_rejected() {
        assert_eq!(
            parse_authorization(" ApiKey test-key"),
            Err(AuthError::MalformedAuthHeader)
        );
    }

    #[test]
    fn test_get_api_key_tab_separator_rejected() {
        let headers = headers_with("ApiKey\ttest-key");
        assert_eq!(get_api_key(&headers), Err(AuthError::MalformedAuthHeader));
    }

    #[test]
    fn test_get_api_key_header_name_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(b"AUTHORIZATION").unwrap(),
            HeaderValue::from_static("ApiKey upper-key"),
        );
        assert_eq!(get_api_key(&headers), Ok("upper-key"));
    }

    #[test]
    fn test_get_api_key_first_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append(AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        headers.append(AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Ok("first"));
    }

    #[test]
    fn test_get_api_key_non_ascii_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey caf\xc3\xa9").unwrap(),
        );
        assert_eq!(get_api_key(&headers), Err(AuthError::MalformedAuthHeader));
    }

    #[test]
    fn test_get_api_key_ignores_other_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("ApiKey test-key"));
        assert_eq!(get_api_key(&headers), Err(AuthError::MissingAuthHeader));
    }

    #[test]
    fn test_get_api_key_is_idempotent() {
        let headers = headers_with("ApiKey same-key");
        let first = get_api_key(&headers);
        let second = get_api_key(&headers);
        assert_eq!(first, second);

        let headers = headers_with("Bearer nope");
        assert_eq!(get_api_key(&headers), get_api_key(&headers));
    }

    #[test]
    fn test_parse_authorization_returns_remainder_verbatim() {
        assert_eq!(parse_authorization("ApiKey  padded"), Ok(" padded"));
        assert_eq!(parse_authorization("ApiKey trailing "), Ok("trailing "));
        assert_eq!(parse_authorization("ApiKey "), Ok(""));
    }

    #[test]
    fn test_parse_authorization_any_key_roundtrips() {
        for key in ["k", "test-key", "abc123", "with/slash+plus=", "a b c"] {
            let value = format!("{API_KEY_SCHEME} {key}");
            assert_eq!(parse_authorization(&value), Ok(key));
        }
    }
}
