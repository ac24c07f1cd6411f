use anyhow::{Context, Result};
use pexels_client::api::models::{Photo, PhotoPage, Video, VideoPage};
use serde_json::Value;

/// Response shape expected for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Photos,
    Videos,
    Photo,
}

/// Render a response as one line per item.
pub fn render(kind: Kind, response: Value) -> Result<String> {
    let lines = match kind {
        Kind::Photos => {
            let page: PhotoPage =
                serde_json::from_value(response).context("unexpected photo listing shape")?;
            let mut lines = vec![page_header(page.page, page.total_results)];
            lines.extend(page.photos.iter().map(photo_line));
            lines
        }
        Kind::Videos => {
            let page: VideoPage =
                serde_json::from_value(response).context("unexpected video listing shape")?;
            let mut lines = vec![page_header(page.page, page.total_results)];
            lines.extend(page.videos.iter().map(video_line));
            lines
        }
        Kind::Photo => {
            let photo: Photo =
                serde_json::from_value(response).context("unexpected photo shape")?;
            vec![photo_line(&photo)]
        }
    };
    Ok(lines.join("\n"))
}

fn page_header(page: u32, total: u64) -> String {
    format!("page {page} of {total} results")
}

fn photo_line(photo: &Photo) -> String {
    format!(
        "{}\t{}x{}\t{}\t{}",
        photo.id, photo.width, photo.height, photo.photographer, photo.src.original
    )
}

fn video_line(video: &Video) -> String {
    let link = video.best_file().map(|f| f.link.as_str()).unwrap_or(video.url.as_str());
    format!(
        "{}\t{}x{}\t{}s\t{}",
        video.id, video.width, video.height, video.duration, link
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_photo_listing() {
        let out = render(
            Kind::Photos,
            json!({
                "page": 1,
                "total_results": 2,
                "photos": [
                    {"id": 1, "width": 10, "height": 20, "url": "u1", "photographer": "A", "src": {"original": "o1"}},
                    {"id": 2, "width": 30, "height": 40, "url": "u2", "photographer": "B", "src": {"original": "o2"}}
                ]
            }),
        )
        .unwrap();

        assert_eq!(out, "page 1 of 2 results\n1\t10x20\tA\to1\n2\t30x40\tB\to2");
    }

    #[test]
    fn video_line_falls_back_to_page_url() {
        let out = render(
            Kind::Videos,
            json!({
                "page": 1,
                "total_results": 1,
                "videos": [{"id": 7, "width": 1, "height": 1, "url": "https://www.pexels.com/video/7/", "duration": 9}]
            }),
        )
        .unwrap();

        assert!(out.ends_with("7\t1x1\t9s\thttps://www.pexels.com/video/7/"), "{out}");
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(render(Kind::Photo, json!({"error": "nope"})).is_err());
    }
}
