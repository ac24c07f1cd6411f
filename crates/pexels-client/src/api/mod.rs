//! Pexels REST API client.
//!
//! Provides access to the photo and video endpoints with the raw API key
//! injected as the `Authorization` header on every request.

mod endpoint;
mod photos;
mod query;
mod request;
mod videos;

pub mod models;

pub use endpoint::Endpoint;
pub use query::{DEFAULT_PAGE, DEFAULT_PER_PAGE, Paging, VideoBounds, prepare_url};

use reqwest::header::HeaderMap;

use crate::PexelsError;

pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/";

/// Pexels API client holding the key and its derived headers.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct PexelsClient {
    pub(super) http: reqwest::Client,
    pub(super) api_key: String,
    pub(super) headers: HeaderMap,
    pub(super) base_url: String,
}

impl std::fmt::Debug for PexelsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PexelsClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
