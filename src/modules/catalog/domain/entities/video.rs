use serde::{Deserialize, Serialize};

const YOUTUBE_SITE: &str = "YouTube";
const YOUTUBE_EMBED_URL: &str = "https://www.youtube.com/embed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    /// Site-specific video key (the YouTube video ID for YouTube)
    pub key: String,
    pub name: String,
    pub site: String,
    /// "Trailer", "Teaser", "Clip", "Featurette", ...
    pub kind: String,
}

impl Video {
    pub fn is_youtube(&self) -> bool {
        self.site == YOUTUBE_SITE
    }

    pub fn is_trailer(&self) -> bool {
        self.kind == "Trailer"
    }

    /// Trailers and teasers hosted on YouTube are the only playable videos
    pub fn is_playable_trailer(&self) -> bool {
        self.is_youtube() && (self.is_trailer() || self.kind == "Teaser")
    }

    pub fn embed_url(&self) -> Option<String> {
        self.is_youtube()
            .then(|| format!("{}/{}", YOUTUBE_EMBED_URL, self.key))
    }
}

/// Playable trailers in catalog order
pub fn playable_trailers(videos: &[Video]) -> Vec<Video> {
    videos
        .iter()
        .filter(|v| v.is_playable_trailer())
        .cloned()
        .collect()
}

/// First real trailer, else the first playable video of any kind
pub fn main_trailer(trailers: &[Video]) -> Option<&Video> {
    trailers
        .iter()
        .find(|v| v.is_trailer())
        .or_else(|| trailers.first())
}
