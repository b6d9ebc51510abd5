pub mod metadata;
pub mod transcript;

use std::{fmt::Display, future::Future};

use url::Url;

use crate::types::VideoInfo;

/// Looks up title and description of a video.
pub trait VideoInfoExtractor {
    type Error: Display + Send;

    fn extract(&self, url: &str) -> impl Future<Output = Result<VideoInfo, Self::Error>> + Send;
}

/// Extracts the video id from the usual YouTube URL shapes.
pub fn video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();

    let id = if host == "youtu.be" {
        parsed.path_segments()?.next().map(str::to_string)
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        let mut segments = parsed.path_segments()?;
        match segments.next() {
            Some("watch") => parsed
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned()),
            Some("shorts" | "embed" | "live" | "v") => segments.next().map(str::to_string),
            _ => None,
        }
    } else {
        None
    };

    id.map(|id| id.trim().to_string())
        .filter(|id| is_valid_video_id(id))
}

fn is_valid_video_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
