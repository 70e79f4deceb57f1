//! Configuration management for keygate.
//!
//! Values come from command-line arguments, falling back to
//! `KEYGATE_*` environment variables, then to defaults.

mod settings;

pub use settings::Config;
