//! Pexels API client library.
//!
//! Maps the photo and video endpoints of the Pexels REST API onto async
//! method calls. Every call issues exactly one GET request carrying the
//! `Authorization` header and hands back the JSON body as-is.

pub mod api;

pub use api::{Endpoint, Paging, PexelsClient, VideoBounds, prepare_url};

/// Unified error type for the pexels-client crate.
#[derive(Debug, thiserror::Error)]
pub enum PexelsError {
    #[error("API key missing")]
    MissingApiKey,

    #[error("API key is not a valid header value: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pexels API error (status {status}): {message}")]
    Api { status: u16, message: String },
}
