use serde::Serialize;
use url::Url;

pub const INVALID_VIDEO: &str = "[invalid video]";

/// Playable form of a lesson's media reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum VideoEmbed {
    YouTube { video_id: String },
    Vimeo { video_id: String },
    /// Plain video file served over HTTP
    File { url: String },
    Invalid,
}

impl VideoEmbed {
    pub fn parse(reference: &str) -> Self {
        let Ok(url) = Url::parse(reference.trim()) else {
            return VideoEmbed::Invalid;
        };
        if !matches!(url.scheme(), "http" | "https") {
            return VideoEmbed::Invalid;
        }

        let host = url.host_str().unwrap_or_default().trim_start_matches("www.").trim_start_matches("m.");
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        match host {
            "youtube.com" => {
                let id = match segments.as_slice() {
                    ["watch"] => url
                        .query_pairs()
                        .find(|(k, _)| k == "v")
                        .map(|(_, v)| v.into_owned()),
                    ["embed", id] | ["shorts", id] | ["live", id] => Some(id.to_string()),
                    _ => None,
                };
                youtube(id)
            }
            "youtu.be" => youtube(segments.first().map(|s| s.to_string())),
            "vimeo.com" => vimeo(segments.last().copied()),
            "player.vimeo.com" => match segments.as_slice() {
                ["video", id] => vimeo(Some(*id)),
                _ => VideoEmbed::Invalid,
            },
            _ => {
                let path = url.path().to_ascii_lowercase();
                if [".mp4", ".webm", ".m3u8", ".ogg"].iter().any(|ext| path.ends_with(ext)) {
                    VideoEmbed::File { url: url.to_string() }
                } else {
                    VideoEmbed::Invalid
                }
            }
        }
    }

    pub fn embed_url(&self) -> Option<String> {
        match self {
            VideoEmbed::YouTube { video_id } => Some(format!("https://www.youtube.com/embed/{}", video_id)),
            VideoEmbed::Vimeo { video_id } => Some(format!("https://player.vimeo.com/video/{}", video_id)),
            VideoEmbed::File { url } => Some(url.clone()),
            VideoEmbed::Invalid => None,
        }
    }
}

fn youtube(id: Option<String>) -> VideoEmbed {
    match id {
        Some(id)
            if id.len() == 11
                && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') =>
        {
            VideoEmbed::YouTube { video_id: id }
        }
        _ => VideoEmbed::Invalid,
    }
}

fn vimeo(id: Option<&str>) -> VideoEmbed {
    match id {
        Some(id) if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) => {
            VideoEmbed::Vimeo { video_id: id.to_string() }
        }
        _ => VideoEmbed::Invalid,
    }
}

/// Embed line for a lesson; a missing or malformed reference renders the placeholder.
pub fn render_video(reference: Option<&str>) -> String {
    match reference.map(VideoEmbed::parse).and_then(|v| v.embed_url()) {
        Some(url) => format!("Video: {}", url),
        None => format!("Video: {}", INVALID_VIDEO),
    }
}
