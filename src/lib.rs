//! keygate
//!
//! Extracts API keys from `Authorization: ApiKey <key>` headers, with an
//! axum extractor and a small HTTP server around it.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod config;
pub mod error;
pub mod server;

pub use auth::{get_api_key, parse_authorization, ApiKey, API_KEY_SCHEME};
pub use config::Config;
pub use error::{AuthError, Error, Result};
