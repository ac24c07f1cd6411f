use serde_json::Value;

use super::*;

impl PexelsClient {
    /// Search videos by free-text query, optionally bounded by width and
    /// duration.
    pub async fn search_videos(
        &self,
        query: &str,
        paging: Paging,
        bounds: VideoBounds,
    ) -> Result<Value, PexelsError> {
        let url = prepare_url(
            &self.endpoint_url(Endpoint::VideoSearch),
            Some(query),
            paging,
            Some(bounds),
        );
        self.get_json(&url).await
    }

    /// Get the currently popular videos, optionally bounded by width and
    /// duration.
    pub async fn popular_videos(
        &self,
        paging: Paging,
        bounds: VideoBounds,
    ) -> Result<Value, PexelsError> {
        let url = prepare_url(
            &self.endpoint_url(Endpoint::VideoPopular),
            None,
            paging,
            Some(bounds),
        );
        self.get_json(&url).await
    }
}
