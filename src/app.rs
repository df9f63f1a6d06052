//! Application context: builds every container once, in dependency order,
//! and owns their teardown.

use crate::modules::auth::AuthStore;
use crate::modules::catalog::{CatalogRepository, MovieDetailsService, TmdbAdapter};
use crate::modules::movies::MovieStore;
use crate::modules::persistence::{FileStore, KeyValueStore, PersistenceAdapter};
use crate::modules::theme::{StaticThemeProbe, ThemeStore};
use crate::shared::config::AppConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{init_logger, TimedOperation};
use crate::log_info;
use std::sync::Arc;

pub struct AppContext {
    pub config: AppConfig,
    pub catalog: Arc<dyn CatalogRepository>,
    pub details: MovieDetailsService,
    pub auth: AuthStore,
    pub theme: ThemeStore,
    pub movies: Arc<MovieStore>,
}

impl AppContext {
    /// Production wiring: file-backed storage and the TMDB adapter
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        init_logger();
        let timer = TimedOperation::new("app_context_init");

        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.storage_dir)?);
        let catalog: Arc<dyn CatalogRepository> = Arc::new(TmdbAdapter::new(&config)?);
        let context = Self::assemble(config, store, catalog);

        timer.finish_with_info("containers ready");
        Ok(context)
    }

    /// Wire the containers around an explicit store and catalog
    pub fn assemble(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<dyn CatalogRepository>,
    ) -> Self {
        let persistence = PersistenceAdapter::new(store);

        let auth = AuthStore::new(persistence.clone(), config.auth_latency);
        let probe = StaticThemeProbe::from_setting(config.preferred_theme.as_deref());
        let theme = ThemeStore::new(persistence.clone(), &probe);
        let movies = MovieStore::new(Arc::clone(&catalog), persistence, config.search_debounce);
        let details = MovieDetailsService::new(Arc::clone(&catalog));

        log_info!("Application context assembled");
        Self {
            config,
            catalog,
            details,
            auth,
            theme,
            movies,
        }
    }

    /// Single teardown point; pending debounced work is dropped
    pub fn shutdown(&self) {
        self.movies.shutdown();
        log_info!("Application context shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::repositories::MockCatalogRepository;
    use crate::modules::persistence::{MemoryStore, StorageKey};
    use crate::modules::theme::ThemeMode;

    #[test]
    fn test_assemble_restores_persisted_preferences() {
        let store = MemoryStore::new()
            .with_entry(StorageKey::Theme.as_str(), "dark")
            .with_entry(StorageKey::Favorites.as_str(), r#"[{"id": 9, "title": "Nine"}]"#);
        let config = AppConfig::for_testing(std::env::temp_dir());

        let context = AppContext::assemble(
            config,
            Arc::new(store),
            Arc::new(MockCatalogRepository::new()),
        );

        assert_eq!(context.theme.mode(), ThemeMode::Dark);
        assert!(context.movies.is_favorite(9));
        assert!(!context.auth.is_authenticated());
        context.shutdown();
    }
}
