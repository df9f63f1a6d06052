use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size tokens accepted by the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    W92,
    W154,
    W185,
    W342,
    W500,
    W780,
    W1280,
    Original,
}

impl ImageSize {
    pub const POSTER: ImageSize = ImageSize::W342;
    pub const BACKDROP: ImageSize = ImageSize::W1280;
    pub const THUMBNAIL: ImageSize = ImageSize::W92;

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W92 => "w92",
            ImageSize::W154 => "w154",
            ImageSize::W185 => "w185",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::W1280 => "w1280",
            ImageSize::Original => "original",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w92" => Ok(ImageSize::W92),
            "w154" => Ok(ImageSize::W154),
            "w185" => Ok(ImageSize::W185),
            "w342" => Ok(ImageSize::W342),
            "w500" => Ok(ImageSize::W500),
            "w780" => Ok(ImageSize::W780),
            "w1280" => Ok(ImageSize::W1280),
            "original" => Ok(ImageSize::Original),
            other => Err(format!("Unknown image size '{}'", other)),
        }
    }
}

/// Composes absolute image URLs from the relative paths the catalog returns
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        let separator = if path.starts_with('/') { "" } else { "/" };
        Some(format!("{}/{}{}{}", self.base_url, size, separator, path))
    }

    pub fn poster(&self, path: Option<&str>) -> Option<String> {
        self.url(path, ImageSize::POSTER)
    }

    pub fn backdrop(&self, path: Option<&str>) -> Option<String> {
        self.url(path, ImageSize::BACKDROP)
    }
}
