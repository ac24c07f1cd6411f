use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use super::*;

impl PexelsClient {
    /// Create a client for the public Pexels API.
    ///
    /// Fails with [`PexelsError::MissingApiKey`] before any request can be
    /// made when the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, PexelsError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(PexelsError::MissingApiKey);
        }

        let headers = auth_headers(&api_key)?;
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            headers,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Use a caller-configured HTTP client, e.g. one with a timeout.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn endpoint_url(&self, endpoint: Endpoint) -> String {
        endpoint.url(&self.base_url)
    }

    /// Execute a GET request with the auth header and decode the JSON body.
    pub async fn get_json(&self, url: &str) -> Result<Value, PexelsError> {
        let resp = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(url, status = status.as_u16(), "Pexels response");

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Pexels API returned an error");
            return Err(PexelsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// The key goes out verbatim, with no `Bearer` prefix.
fn auth_headers(api_key: &str) -> Result<HeaderMap, PexelsError> {
    let mut value = HeaderValue::from_str(api_key)?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
