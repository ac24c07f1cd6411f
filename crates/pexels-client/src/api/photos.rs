use std::fmt::Display;

use serde_json::Value;

use super::*;

impl PexelsClient {
    /// Search photos by free-text query.
    pub async fn search(&self, query: &str, paging: Paging) -> Result<Value, PexelsError> {
        let url = prepare_url(
            &self.endpoint_url(Endpoint::Search),
            Some(query),
            paging,
            None,
        );
        self.get_json(&url).await
    }

    /// Get the currently popular photos.
    pub async fn popular_photos(&self, paging: Paging) -> Result<Value, PexelsError> {
        let url = prepare_url(&self.endpoint_url(Endpoint::Popular), None, paging, None);
        self.get_json(&url).await
    }

    /// Get photos curated by the Pexels team.
    pub async fn curated_photos(&self, paging: Paging) -> Result<Value, PexelsError> {
        let url = prepare_url(&self.endpoint_url(Endpoint::Curated), None, paging, None);
        self.get_json(&url).await
    }

    /// Get a single photo by id. No query string is attached.
    pub async fn get_photo(&self, id: impl Display) -> Result<Value, PexelsError> {
        let url = photo_url(&self.endpoint_url(Endpoint::Photo), id);
        self.get_json(&url).await
    }
}

pub(super) fn photo_url(base: &str, id: impl Display) -> String {
    format!("{base}{id}")
}
