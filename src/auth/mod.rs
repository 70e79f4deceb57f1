//! API key authentication.
//!
//! Extracts the credential from an `Authorization: ApiKey <key>` header.
//! The key is opaque here: it is never checked against anything.
//!
//! - [`get_api_key`] is the pure parser over an `http::HeaderMap`
//! - [`ApiKey`] is the axum extractor built on it

mod extract;
mod header;

pub use extract::{ApiKey, AuthErrorBody};
pub use header::{get_api_key, parse_authorization, API_KEY_SCHEME};
