/// Recording in-memory catalog with scriptable latency and failures
use super::factories::{popular_page, search_page};
use async_trait::async_trait;
use popcorn_lib::modules::catalog::{CatalogRepository, Genre, MovieDetails, MovieSummary, Video};
use popcorn_lib::shared::application::Page;
use popcorn_lib::shared::errors::{AppError, AppResult};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCall {
    Popular(u32),
    Trending,
    Search(String, u32),
    Details(u64),
    Videos(u64),
    Recommendations(u64),
    Genres,
}

pub struct FakeCatalog {
    popular_total_pages: u32,
    search_total_pages: u32,
    search_delays: Mutex<HashMap<String, Duration>>,
    failing_queries: Mutex<HashSet<String>>,
    failing_popular_pages: Mutex<HashSet<u32>>,
    calls: Mutex<Vec<CatalogCall>>,
}

impl FakeCatalog {
    pub fn new(popular_total_pages: u32, search_total_pages: u32) -> Self {
        Self {
            popular_total_pages,
            search_total_pages,
            search_delays: Mutex::new(HashMap::new()),
            failing_queries: Mutex::new(HashSet::new()),
            failing_popular_pages: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn delay_search(&self, query: &str, delay: Duration) {
        self.search_delays.lock().unwrap().insert(query.to_string(), delay);
    }

    pub fn fail_search(&self, query: &str) {
        self.failing_queries.lock().unwrap().insert(query.to_string());
    }

    pub fn fail_popular_page(&self, page: u32) {
        self.failing_popular_pages.lock().unwrap().insert(page);
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<(String, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                CatalogCall::Search(query, page) => Some((query, page)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: CatalogCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn offline() -> AppError {
        AppError::NetworkError("connection refused".to_string())
    }
}

#[async_trait]
impl CatalogRepository for FakeCatalog {
    async fn fetch_popular(&self, page: u32) -> AppResult<Page<MovieSummary>> {
        self.record(CatalogCall::Popular(page));
        if self.failing_popular_pages.lock().unwrap().contains(&page) {
            return Err(Self::offline());
        }
        Ok(popular_page(page, self.popular_total_pages))
    }

    async fn fetch_trending(&self) -> AppResult<Page<MovieSummary>> {
        self.record(CatalogCall::Trending);
        Ok(popular_page(9, 1))
    }

    async fn search(&self, query: &str, page: u32) -> AppResult<Page<MovieSummary>> {
        self.record(CatalogCall::Search(query.to_string(), page));
        let delay = self.search_delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing_queries.lock().unwrap().contains(query) {
            return Err(Self::offline());
        }
        Ok(search_page(query, page, self.search_total_pages))
    }

    async fn fetch_details(&self, id: u64) -> AppResult<MovieDetails> {
        self.record(CatalogCall::Details(id));
        Err(Self::offline())
    }

    async fn fetch_videos(&self, id: u64) -> AppResult<Vec<Video>> {
        self.record(CatalogCall::Videos(id));
        Ok(Vec::new())
    }

    async fn fetch_recommendations(&self, id: u64) -> AppResult<Page<MovieSummary>> {
        self.record(CatalogCall::Recommendations(id));
        Ok(Page::empty())
    }

    async fn fetch_genres(&self) -> AppResult<Vec<Genre>> {
        self.record(CatalogCall::Genres);
        Ok(Vec::new())
    }
}
