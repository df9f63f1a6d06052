use async_trait::async_trait;

use crate::modules::catalog::domain::entities::{Genre, MovieDetails, MovieSummary, Video};
use crate::shared::{application::Page, errors::AppResult};

/// Read-only access to the remote movie catalog
///
/// Every call goes to the network: no caching and no retries. Transport and
/// HTTP failures come back as `AppError::NetworkError`; an empty page is a
/// normal result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn fetch_popular(&self, page: u32) -> AppResult<Page<MovieSummary>>;

    async fn fetch_trending(&self) -> AppResult<Page<MovieSummary>>;

    /// Blank queries resolve to an empty page without touching the network
    async fn search(&self, query: &str, page: u32) -> AppResult<Page<MovieSummary>>;

    async fn fetch_details(&self, id: u64) -> AppResult<MovieDetails>;

    async fn fetch_videos(&self, id: u64) -> AppResult<Vec<Video>>;

    async fn fetch_recommendations(&self, id: u64) -> AppResult<Page<MovieSummary>>;

    async fn fetch_genres(&self) -> AppResult<Vec<Genre>>;
}
