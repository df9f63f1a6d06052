//! HTTP client for the catalog API with client-side throttling
//!
//! Failures are never retried: any transport error, non-2xx status or body
//! that does not match the expected schema comes back as a `NetworkError`
//! right away, after being logged.

use super::tmdb::models::TmdbError;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const USER_AGENT: &str = "popcorn/0.1";

/// Throttled JSON-over-HTTP client
pub struct CatalogHttpClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    provider_name: String,
}

impl CatalogHttpClient {
    /// Client tuned for TMDB (roughly 20 requests per second sustained)
    pub fn for_tmdb(timeout: Option<Duration>) -> AppResult<Self> {
        Self::new("TMDB", 20, 20, timeout)
    }

    pub fn new(
        provider_name: &str,
        requests_per_second: u32,
        burst_size: u32,
        timeout: Option<Duration>,
    ) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            AppError::ConfigError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            rate_limiter: Self::create_rate_limiter(requests_per_second, burst_size),
            provider_name: provider_name.to_string(),
        })
    }

    fn create_rate_limiter(requests_per_second: u32, burst_size: u32) -> DirectRateLimiter {
        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(burst_size).unwrap_or(NonZeroU32::MIN);
        GovernorRateLimiter::direct(Quota::per_second(rate).allow_burst(burst))
    }

    /// GET `url` with `params` and decode the JSON body
    pub async fn get<T>(&self, url: &str, params: &[(String, String)]) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let endpoint = redact(url);
        LogContext::api_call(&endpoint, "started", None);
        let started = Instant::now();

        self.rate_limiter.until_ready().await;

        let response = self
            .client
            .get(url)
            .query(params)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("{} request to {} failed: {}", self.provider_name, endpoint, e);
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = self.error_message(response).await;
            warn!(
                "{} API returned {} for {}: {}",
                self.provider_name, status, endpoint, message
            );
            return Err(AppError::NetworkError(format!(
                "{} API returned {}: {}",
                self.provider_name, status, message
            )));
        }

        let parsed = self.parse_response(response).await;
        LogContext::api_call(
            &endpoint,
            if parsed.is_ok() { "ok" } else { "malformed" },
            Some(started.elapsed().as_millis() as u64),
        );
        parsed
    }

    /// Prefer the catalog's own status message over the bare status line
    async fn error_message(&self, response: Response) -> String {
        let status = response.status();
        match response.text().await {
            Ok(body) => serde_json::from_str::<TmdbError>(&body)
                .ok()
                .and_then(|e| e.status_message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                }),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        }
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            error!("Failed to read {} response: {}", self.provider_name, e);
            AppError::from(e)
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            error!(
                "Malformed {} response: {}. Response: {}",
                self.provider_name,
                e,
                truncate(&response_text, 200)
            );
            AppError::NetworkError(format!(
                "Malformed {} response: {}",
                self.provider_name, e
            ))
        })
    }

    /// Check if a request can be made now without waiting on the throttle
    pub fn can_make_request_now(&self) -> bool {
        let ready = self.rate_limiter.check().is_ok();
        debug!("{} throttle ready: {}", self.provider_name, ready);
        ready
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

/// Endpoint without query string, so the API key never reaches the logs
fn redact(url: &str) -> String {
    url.split('?').next().unwrap_or(url).to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
