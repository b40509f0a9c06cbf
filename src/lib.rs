//! Azure Translate - Microsoft Translator client library
//!
//! Thin client for the Microsoft Translator service: exchanges OAuth2 client
//! credentials for a bearer token, then invokes the remote translate
//! operations (single string or ordered batch with per-item fallback).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    auth::Authenticator,
    client::Translator,
    config::TranslatorConfig,
    errors::TranslationError,
    models::{AccessToken, BatchTranslation, Credentials, TranslationRequest},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
