use crate::{
    modules::catalog::{
        domain::{
            entities::{Genre, MovieDetails, MovieSummary, Video},
            repositories::CatalogRepository,
            value_objects::{ImageSize, ImageUrlBuilder},
        },
        infrastructure::http_client::CatalogHttpClient,
    },
    shared::{
        application::Page,
        config::AppConfig,
        errors::AppResult,
        utils::{logger::LogContext, validation::Validator},
    },
};
use async_trait::async_trait;
use tracing::info;

use super::mapper::TmdbMapper;
use super::models::*;

/// TMDB (The Movie Database) catalog adapter over the v3 REST API
pub struct TmdbAdapter {
    http_client: CatalogHttpClient,
    base_url: String,
    api_key: String,
    language: String,
    images: ImageUrlBuilder,
    mapper: TmdbMapper,
}

impl TmdbAdapter {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http_client = CatalogHttpClient::for_tmdb(config.request_timeout)?;
        Ok(Self::with_client(http_client, config))
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: CatalogHttpClient, config: &AppConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            images: ImageUrlBuilder::new(config.image_base_url.clone()),
            mapper: TmdbMapper::new(),
        }
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    pub fn build_image_url(&self, path: &str, size: ImageSize) -> Option<String> {
        self.images.url(Some(path), size)
    }

    pub fn images(&self) -> &ImageUrlBuilder {
        &self.images
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get<T>(&self, endpoint: &str, params: TmdbQueryParams) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.build_url(endpoint);
        let query = params.to_query_params(&self.api_key, &self.language);
        self.http_client.get(&url, &query).await
    }

    async fn get_page(
        &self,
        endpoint: &str,
        params: TmdbQueryParams,
    ) -> AppResult<Page<MovieSummary>> {
        let response: TmdbPagedResponse = self.get(endpoint, params).await?;
        Ok(self.mapper.map_page(response))
    }
}

#[async_trait]
impl CatalogRepository for TmdbAdapter {
    async fn fetch_popular(&self, page: u32) -> AppResult<Page<MovieSummary>> {
        Validator::validate_page(page)?;
        info!("TMDB: Getting popular movies (page {})", page);
        self.get_page("/movie/popular", TmdbQueryParams::new().page(page))
            .await
    }

    async fn fetch_trending(&self) -> AppResult<Page<MovieSummary>> {
        info!("TMDB: Getting trending movies");
        self.get_page("/trending/movie/day", TmdbQueryParams::new())
            .await
    }

    async fn search(&self, query: &str, page: u32) -> AppResult<Page<MovieSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Page::empty());
        }
        Validator::validate_page(page)?;

        LogContext::search_operation(query, page, None);
        let result = self
            .get_page(
                "/search/movie",
                TmdbQueryParams::new()
                    .query(query)
                    .page(page)
                    .include_adult(false),
            )
            .await?;
        LogContext::search_operation(query, page, Some(result.items.len()));

        Ok(result)
    }

    async fn fetch_details(&self, id: u64) -> AppResult<MovieDetails> {
        info!("TMDB: Getting details for movie {}", id);
        let details: TmdbMovieDetails = self
            .get(
                &format!("/movie/{}", id),
                TmdbQueryParams::new().append_to_response("credits"),
            )
            .await?;
        self.mapper.map_details(details)
    }

    async fn fetch_videos(&self, id: u64) -> AppResult<Vec<Video>> {
        info!("TMDB: Getting videos for movie {}", id);
        let response: TmdbVideosResponse = self
            .get(&format!("/movie/{}/videos", id), TmdbQueryParams::new())
            .await?;

        Ok(response
            .results
            .into_iter()
            .filter_map(|v| self.mapper.map_video(v))
            .collect())
    }

    async fn fetch_recommendations(&self, id: u64) -> AppResult<Page<MovieSummary>> {
        info!("TMDB: Getting recommendations for movie {}", id);
        self.get_page(
            &format!("/movie/{}/recommendations", id),
            TmdbQueryParams::new(),
        )
        .await
    }

    async fn fetch_genres(&self) -> AppResult<Vec<Genre>> {
        info!("TMDB: Getting movie genres");
        let response: TmdbGenresResponse =
            self.get("/genre/movie/list", TmdbQueryParams::new()).await?;

        Ok(response
            .genres
            .into_iter()
            .map(|g| self.mapper.map_genre(g))
            .collect())
    }
}
