pub mod app;
pub mod modules;
pub mod shared;

use app::AppContext;
use shared::config::AppConfig;
use shared::errors::AppResult;
use shared::utils::logger::{init_logger, LogContext};

/// Boot the context from the environment, load the browse lists once and
/// log what came back.
pub async fn run() -> AppResult<()> {
    init_logger();
    let config = AppConfig::from_env().inspect_err(|e| {
        LogContext::error_with_context(e, "loading configuration");
    })?;
    let context = AppContext::from_config(config)?;

    tokio::join!(context.movies.fetch_popular(), context.movies.load_trending());

    let snapshot = context.movies.snapshot();
    log_info!(
        "Loaded {} popular movies (page {}/{}), {} trending, {} favorites",
        snapshot.results.len(),
        snapshot.page,
        snapshot.total_pages,
        snapshot.trending.len(),
        snapshot.favorites.len()
    );
    if let Some(error) = &snapshot.error {
        log_warn!("Catalog unavailable: {}", error);
    }
    for movie in snapshot.trending.iter().take(5) {
        log_info!("Trending: {} ({})", movie.title, movie.rating_label());
    }
    log_info!(
        "Theme: {}, signed in: {}",
        context.theme.mode(),
        context.auth.is_authenticated()
    );

    context.shutdown();
    Ok(())
}
