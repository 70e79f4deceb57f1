//! axum extractor for `Authorization: ApiKey <key>`.

use std::fmt;

use axum::{
    extract::FromRequestParts,
    http::{header::WWW_AUTHENTICATE, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::header::{get_api_key, API_KEY_SCHEME};
use crate::error::AuthError;
use crate::server::metrics::AUTH_ATTEMPTS;

/// Length of the hex fingerprint returned by [`ApiKey::fingerprint`].
const FINGERPRINT_LEN: usize = 16;

// Must fit in the hex digest (two chars per byte).
const _: () = assert!(FINGERPRINT_LEN <= blake3::OUT_LEN * 2);

/// API key taken from the request.
///
/// Use as a handler argument; requests without a well-formed header are
/// rejected with [`AuthError`] before the handler runs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap an already extracted key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the raw key.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Short blake3 digest of the key, safe to log or return.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let hash = blake3::hash(self.0.as_bytes());
        hash.to_hex()[..FINGERPRINT_LEN].to_string()
    }
}

// Never print the key itself.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.fingerprint()).finish()
    }
}

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match get_api_key(&parts.headers) {
            Ok(key) => {
                AUTH_ATTEMPTS.with_label_values(&["accepted"]).inc();
                let key = Self::new(key);
                tracing::trace!(fingerprint = %key.fingerprint(), "API key extracted");
                Ok(key)
            }
            Err(e) => {
                AUTH_ATTEMPTS.with_label_values(&[e.reason()]).inc();
                tracing::debug!(reason = e.reason(), "Rejected authorization header");
                Err(e)
            }
        }
    }
}

/// JSON body sent with an auth rejection.
#[derive(Debug, Serialize)]
pub struct AuthErrorBody {
    pub error: String,
    pub reason: &'static str,
}

impl AuthError {
    /// HTTP status for this rejection.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::MissingAuthHeader => StatusCode::UNAUTHORIZED,
            Self::MalformedAuthHeader => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = AuthErrorBody {
            error: self.to_string(),
            reason: self.reason(),
        };

        let mut response = (self.status_code(), Json(body)).into_response();
        if self == Self::MissingAuthHeader {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static(API_KEY_SCHEME));
        }
        response
    }
}
