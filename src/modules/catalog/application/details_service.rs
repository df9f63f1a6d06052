use crate::modules::catalog::domain::{
    entities::{main_trailer, playable_trailers, MovieDetails, MovieSummary, Video},
    repositories::CatalogRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::TimedOperation;
use crate::{log_info, log_warn};
use serde::Serialize;
use std::sync::Arc;

/// Everything the details view shows for one movie
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailView {
    pub details: MovieDetails,
    /// YouTube trailers and teasers, catalog order
    pub trailers: Vec<Video>,
    pub recommendations: Vec<MovieSummary>,
}

impl MovieDetailView {
    pub fn main_trailer(&self) -> Option<&Video> {
        main_trailer(&self.trailers)
    }
}

pub struct MovieDetailsService {
    catalog: Arc<dyn CatalogRepository>,
}

impl MovieDetailsService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Fetch details, videos and recommendations concurrently.
    ///
    /// Details and videos are both required: the view is ready only when
    /// both resolve, and either failing fails the whole load. Recommendations
    /// are decorative and degrade to an empty list.
    pub async fn load(&self, id: u64) -> AppResult<MovieDetailView> {
        let timer = TimedOperation::new("load movie details");

        let (details, videos, recommendations) = futures::join!(
            self.catalog.fetch_details(id),
            self.catalog.fetch_videos(id),
            self.catalog.fetch_recommendations(id),
        );

        let details = details?;
        let trailers = playable_trailers(&videos?);
        let recommendations = match recommendations {
            Ok(page) => page.items,
            Err(e) => {
                log_warn!("Recommendations for movie {} unavailable: {}", id, e);
                Vec::new()
            }
        };

        log_info!(
            "Loaded '{}' with {} trailers and {} recommendations",
            details.title,
            trailers.len(),
            recommendations.len()
        );
        timer.finish_with_info(&format!("movie {}", id));

        Ok(MovieDetailView {
            details,
            trailers,
            recommendations,
        })
    }
}
