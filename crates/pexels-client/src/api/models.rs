//! Typed views of the Pexels response bodies.
//!
//! The client hands back raw [`serde_json::Value`]s; convert with
//! `serde_json::from_value::<PhotoPage>(value)` when the typed shape is
//! wanted.

use serde::{Deserialize, Serialize};

/// Paginated photo listing from `/v1/search`, `/v1/popular` and `/v1/curated`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub prev_page: Option<String>,
}

/// Photo from `/v1/photos/{id}` or a photo listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
    #[serde(default)]
    pub photographer: String,
    #[serde(default)]
    pub photographer_url: String,
    #[serde(default)]
    pub photographer_id: Option<u64>,
    #[serde(default)]
    pub avg_color: Option<String>,
    #[serde(default)]
    pub src: PhotoSource,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Image URLs at the sizes Pexels renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoSource {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub large2x: String,
    #[serde(default)]
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub portrait: String,
    #[serde(default)]
    pub landscape: String,
    #[serde(default)]
    pub tiny: String,
}

/// Paginated video listing from `/videos/search` and `/videos/popular`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
    #[serde(default)]
    pub image: String,
    /// Seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub user: Option<VideoUser>,
    #[serde(default)]
    pub video_files: Vec<VideoFile>,
    #[serde(default)]
    pub video_pictures: Vec<VideoPicture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoUser {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// One rendition of a video. Width/height are null for some HLS files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoFile {
    pub id: u64,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub fps: Option<f64>,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoPicture {
    pub id: u64,
    pub picture: String,
    #[serde(default)]
    pub nr: u32,
}

impl Video {
    /// Widest file with a known width, if any.
    pub fn best_file(&self) -> Option<&VideoFile> {
        self.video_files
            .iter()
            .filter(|f| f.width.is_some())
            .max_by_key(|f| f.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_page_deserializes() {
        let body = r##"{
          "total_results": 10000,
          "page": 2,
          "per_page": 1,
          "photos": [{
            "id": 3573351,
            "width": 3066,
            "height": 3968,
            "url": "https://www.pexels.com/photo/trees-during-day-3573351/",
            "photographer": "Lukas Rodriguez",
            "photographer_url": "https://www.pexels.com/@lukas-rodriguez-1845331",
            "photographer_id": 1845331,
            "avg_color": "#374824",
            "src": {
              "original": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png",
              "medium": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png?h=350",
              "tiny": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png?h=200&w=280"
            },
            "liked": false,
            "alt": "Brown Rocks During Golden Hour"
          }],
          "next_page": "https://api.pexels.com/v1/search/?page=3&per_page=1&query=nature"
        }"##;

        let parsed: PhotoPage = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.page, 2);
        assert_eq!(parsed.total_results, 10000);
        let photo = &parsed.photos[0];
        assert_eq!(photo.id, 3573351);
        assert_eq!(photo.photographer_id, Some(1845331));
        assert_eq!(photo.alt.as_deref(), Some("Brown Rocks During Golden Hour"));
        assert!(photo.src.large2x.is_empty());
        assert_eq!(parsed.prev_page, None);
    }

    #[test]
    fn video_page_deserializes_and_picks_widest_file() {
        let body = r#"{
          "page": 1,
          "per_page": 1,
          "total_results": 20475,
          "url": "https://www.pexels.com/videos/",
          "videos": [{
            "id": 1448735,
            "width": 4096,
            "height": 2160,
            "url": "https://www.pexels.com/video/video-of-forest-1448735/",
            "image": "https://images.pexels.com/videos/1448735/free-video-1448735.jpg",
            "duration": 32,
            "user": {
              "id": 574687,
              "name": "Ruvim Miksanskiy",
              "url": "https://www.pexels.com/@digitech"
            },
            "video_files": [
              {"id": 58649, "quality": "sd", "file_type": "video/mp4", "width": 640, "height": 338, "fps": 23.976, "link": "https://player.vimeo.com/sd.mp4"},
              {"id": 58650, "quality": "hd", "file_type": "video/mp4", "width": 2048, "height": 1080, "fps": 23.976, "link": "https://player.vimeo.com/hd.mp4"},
              {"id": 58651, "quality": null, "file_type": "video/mp4", "width": null, "height": null, "link": "https://player.vimeo.com/hls"}
            ],
            "video_pictures": [
              {"id": 133236, "picture": "https://static-videos.pexels.com/videos/1448735/pictures/preview-0.jpg", "nr": 0}
            ]
          }]
        }"#;

        let parsed: VideoPage = serde_json::from_str(body).unwrap();
        let video = &parsed.videos[0];
        assert_eq!(video.duration, 32);
        assert_eq!(video.user.as_ref().unwrap().name, "Ruvim Miksanskiy");
        assert_eq!(video.best_file().unwrap().id, 58650);
    }

    #[test]
    fn best_file_is_none_without_widths() {
        let video: Video = serde_json::from_value(serde_json::json!({
            "id": 1,
            "width": 10,
            "height": 10,
            "url": "https://www.pexels.com/video/1/",
            "video_files": [{"id": 2, "link": "https://player.vimeo.com/hls"}]
        }))
        .unwrap();
        assert!(video.best_file().is_none());
    }
}
