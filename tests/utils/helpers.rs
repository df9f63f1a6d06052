/// Test helper functions and context builders
use super::fake_catalog::FakeCatalog;
use popcorn_lib::app::AppContext;
use popcorn_lib::modules::catalog::CatalogRepository;
use popcorn_lib::modules::movies::MovieStore;
use popcorn_lib::modules::persistence::{FileStore, KeyValueStore, MemoryStore, PersistenceAdapter};
use popcorn_lib::shared::config::AppConfig;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub const DEBOUNCE: Duration = Duration::from_millis(500);

pub fn memory_adapter() -> PersistenceAdapter {
    PersistenceAdapter::new(Arc::new(MemoryStore::new()))
}

pub fn file_adapter(dir: &Path) -> PersistenceAdapter {
    PersistenceAdapter::new(Arc::new(FileStore::open(dir).unwrap()))
}

pub fn movie_store(catalog: Arc<FakeCatalog>, persistence: PersistenceAdapter) -> Arc<MovieStore> {
    let catalog: Arc<dyn CatalogRepository> = catalog;
    MovieStore::new(catalog, persistence, DEBOUNCE)
}

/// Full context over a file store rooted at `dir`
pub fn file_context(dir: &Path, catalog: Arc<FakeCatalog>) -> AppContext {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir).unwrap());
    AppContext::assemble(AppConfig::for_testing(dir), store, catalog)
}
