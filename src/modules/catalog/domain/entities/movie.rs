use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalized movie record used throughout the client
///
/// Received from the catalog and never mutated afterwards; collections only
/// store and drop whole records. Equality of catalog identity is by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

impl MovieSummary {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            release_date: None,
            vote_average: 0.0,
            overview: None,
            backdrop_path: None,
            genre_ids: Vec::new(),
        }
    }

    pub fn with_poster(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    pub fn with_vote_average(mut self, vote: f32) -> Self {
        self.vote_average = vote;
        self
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, RELEASE_DATE_FORMAT).ok())
            .map(|d| d.year())
    }

    /// Vote average with one decimal, as shown on cards ("7.4")
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

/// Full record for the details view (`/movie/{id}` with credits appended)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: f32,
    pub vote_count: u32,
    /// Minutes
    pub runtime: Option<u32>,
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
}

impl MovieDetails {
    /// Reduce to the record stored in favorites
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            release_date: self.release_date.clone(),
            vote_average: self.vote_average,
            overview: self.overview.clone(),
            backdrop_path: self.backdrop_path.clone(),
            genre_ids: self.genres.iter().map(|g| g.id).collect(),
        }
    }

    /// "2h 28m", or None when the catalog has no runtime
    pub fn formatted_runtime(&self) -> Option<String> {
        match self.runtime {
            Some(minutes) if minutes > 0 => Some(format!("{}h {}m", minutes / 60, minutes % 60)),
            _ => None,
        }
    }

    /// Leading billed cast, in catalog order
    pub fn top_cast(&self, limit: usize) -> &[CastMember] {
        &self.cast[..self.cast.len().min(limit)]
    }
}
