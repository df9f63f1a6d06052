//! Favorites & search state container
//!
//! Holds the popular, trending and search lists plus the favorites set, and
//! is the only writer of the favorites storage key. Locks are never held
//! across an `.await`: every catalog call happens between a "begin" and an
//! "apply" critical section, and the apply step checks a request sequence
//! number so that only the most recently issued request of a list can land.

use crate::modules::catalog::{CatalogRepository, MovieSummary};
use crate::modules::movies::domain::{
    BrowseMode, FavoritesSet, MovieStoreSnapshot, SearchState, ToggleOutcome,
};
use crate::modules::persistence::{PersistenceAdapter, StorageKey};
use crate::shared::application::{Page, PagedList};
use crate::shared::errors::AppResult;
use crate::shared::scheduling::Debouncer;
use crate::{log_debug, log_info, log_warn};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

pub const FETCH_ERROR: &str = "Failed to fetch movies";
pub const TRENDING_ERROR: &str = "Failed to load trending movies";
pub const SEARCH_ERROR: &str = "Failed to search movies";
pub const LOAD_MORE_ERROR: &str = "Failed to load more movies";

#[derive(Default)]
struct MovieStoreState {
    popular: PagedList<MovieSummary>,
    trending: Vec<MovieSummary>,
    search: SearchState,
    favorites: FavoritesSet,
    error: Option<String>,
    popular_seq: u64,
    trending_seq: u64,
    search_seq: u64,
}

impl MovieStoreState {
    fn mode(&self) -> BrowseMode {
        BrowseMode::for_query(&self.search.query)
    }

    fn active_list(&self) -> &PagedList<MovieSummary> {
        match self.mode() {
            BrowseMode::Popular => &self.popular,
            BrowseMode::Search => &self.search.results,
        }
    }

    fn is_live_search(&self, seq: u64, query: &str) -> bool {
        self.search_seq == seq && self.search.query.trim() == query
    }
}

/// Marks one catalog request as outstanding until dropped, including when
/// the future owning it is aborted mid-request
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn begin(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

pub struct MovieStore {
    catalog: Arc<dyn CatalogRepository>,
    persistence: PersistenceAdapter,
    debouncer: Debouncer,
    in_flight: AtomicUsize,
    state: RwLock<MovieStoreState>,
}

impl MovieStore {
    /// Build the container and load persisted favorites
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        persistence: PersistenceAdapter,
        search_debounce: Duration,
    ) -> Arc<Self> {
        let favorites: FavoritesSet = persistence.load_or_default(StorageKey::Favorites);
        log_info!("Movie store initialized with {} favorites", favorites.len());

        Arc::new(Self {
            catalog,
            persistence,
            debouncer: Debouncer::new(search_debounce),
            in_flight: AtomicUsize::new(0),
            state: RwLock::new(MovieStoreState {
                favorites,
                ..MovieStoreState::default()
            }),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, MovieStoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MovieStoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    // =========================================================================
    // Catalog lists
    // =========================================================================

    /// (Re)load the first page of popular movies, replacing the list
    pub async fn fetch_popular(&self) {
        let seq = {
            let mut state = self.write();
            state.popular_seq += 1;
            state.popular_seq
        };

        let result = {
            let _request = InFlight::begin(&self.in_flight);
            self.catalog.fetch_popular(1).await
        };

        let mut state = self.write();
        if state.popular_seq != seq {
            log_debug!("Dropping superseded popular response");
            return;
        }
        match result {
            Ok(page) => {
                state.popular.replace(page);
                state.error = None;
            }
            Err(e) => {
                log_warn!("Error fetching popular movies: {}", e);
                state.error = Some(FETCH_ERROR.to_string());
            }
        }
    }

    pub async fn load_trending(&self) {
        let seq = {
            let mut state = self.write();
            state.trending_seq += 1;
            state.trending_seq
        };

        let result = {
            let _request = InFlight::begin(&self.in_flight);
            self.catalog.fetch_trending().await
        };

        let mut state = self.write();
        if state.trending_seq != seq {
            return;
        }
        match result {
            Ok(page) => {
                state.trending = page.items;
                state.error = None;
            }
            Err(e) => {
                log_warn!("Error fetching trending movies: {}", e);
                state.error = Some(TRENDING_ERROR.to_string());
            }
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Keystroke-driven query update.
    ///
    /// Re-arms the debounce timer; the search runs with whatever query is
    /// live when it fires. A blank query cancels the timer and clears the
    /// results locally. Must be called from within a tokio runtime.
    pub fn set_search_query(self: &Arc<Self>, query: impl Into<String>) {
        let query = query.into();
        {
            let mut state = self.write();
            if state.search.query == query {
                return;
            }
            state.search.query = query.clone();

            if query.trim().is_empty() {
                self.debouncer.cancel();
                state.search.clear_results();
                // Anything still in flight belongs to an abandoned query
                state.search_seq += 1;
                return;
            }
        }

        let store = Arc::downgrade(self);
        self.debouncer.arm(move || async move {
            if let Some(store) = store.upgrade() {
                store.run_live_search().await;
            }
        });
    }

    async fn run_live_search(&self) {
        let query = self.read().search.query.clone();
        self.execute_search(&query).await;
    }

    /// Search immediately (form submit), bypassing the debounce timer
    pub async fn search_now(&self, query: &str) {
        self.debouncer.cancel();
        {
            let mut state = self.write();
            state.search.query = query.to_string();
            if query.trim().is_empty() {
                state.search.clear_results();
                state.search_seq += 1;
                return;
            }
        }
        self.execute_search(query).await;
    }

    async fn execute_search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let seq = {
            let mut state = self.write();
            state.search_seq += 1;
            state.search_seq
        };

        let result = {
            let _request = InFlight::begin(&self.in_flight);
            self.catalog.search(query, 1).await
        };

        let mut state = self.write();
        if !state.is_live_search(seq, query) {
            log_debug!("Dropping stale search response for '{}'", query);
            return;
        }
        match result {
            Ok(page) => {
                log_debug!("Search '{}' matched {} movies", query, page.total_results);
                state.search.show_results(query, page);
                state.error = None;
            }
            Err(e) => {
                log_warn!("Error searching movies: {}", e);
                state.error = Some(SEARCH_ERROR.to_string());
            }
        }
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Append the next page of the active list.
    ///
    /// No-op while any request is in flight, when the last known page has
    /// been reached, or while the shown search results belong to a query
    /// that has since been edited.
    pub async fn load_more(&self) {
        let (mode, query, next_page, seq, request) = {
            let state = self.write();
            if self.in_flight() > 0 {
                log_debug!("load_more skipped: request in flight");
                return;
            }
            let mode = state.mode();
            if mode == BrowseMode::Search && !state.search.results_are_current() {
                log_debug!("load_more skipped: search for the live query not loaded yet");
                return;
            }
            let list = state.active_list();
            if !list.has_more() {
                log_debug!("load_more skipped: no more pages");
                return;
            }
            let seq = match mode {
                BrowseMode::Popular => state.popular_seq,
                BrowseMode::Search => state.search_seq,
            };
            (
                mode,
                state.search.results_query.clone(),
                list.next_page(),
                seq,
                InFlight::begin(&self.in_flight),
            )
        };

        let result: AppResult<Page<MovieSummary>> = match mode {
            BrowseMode::Popular => self.catalog.fetch_popular(next_page).await,
            BrowseMode::Search => self.catalog.search(&query, next_page).await,
        };
        drop(request);

        let mut state = self.write();
        let live = match mode {
            BrowseMode::Popular => state.popular_seq == seq,
            BrowseMode::Search => state.is_live_search(seq, &query),
        };
        if !live {
            log_debug!("Dropping stale page {} response", next_page);
            return;
        }
        match result {
            Ok(page) => {
                match mode {
                    BrowseMode::Popular => state.popular.append(page),
                    BrowseMode::Search => state.search.results.append(page),
                }
                state.error = None;
            }
            Err(e) => {
                log_warn!("Error loading page {}: {}", next_page, e);
                state.error = Some(LOAD_MORE_ERROR.to_string());
            }
        }
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Remove the movie if it is a favorite, add it otherwise; persisted at once
    pub fn toggle_favorite(&self, movie: MovieSummary) -> ToggleOutcome {
        let mut state = self.write();
        let outcome = state.favorites.toggle(movie);
        self.persistence.save(StorageKey::Favorites, &state.favorites);
        outcome
    }

    /// Returns whether the movie was added
    pub fn add_favorite(&self, movie: MovieSummary) -> bool {
        let mut state = self.write();
        let added = state.favorites.add(movie);
        if added {
            self.persistence.save(StorageKey::Favorites, &state.favorites);
        }
        added
    }

    /// Returns whether a movie was removed
    pub fn remove_favorite(&self, id: u64) -> bool {
        let mut state = self.write();
        let removed = state.favorites.remove(id);
        if removed {
            self.persistence.save(StorageKey::Favorites, &state.favorites);
        }
        removed
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.read().favorites.contains(id)
    }

    pub fn favorites(&self) -> Vec<MovieSummary> {
        self.read().favorites.as_slice().to_vec()
    }

    // =========================================================================
    // Read model
    // =========================================================================

    pub fn mode(&self) -> BrowseMode {
        self.read().mode()
    }

    /// Search results while a query is live, popular movies otherwise
    pub fn active_results(&self) -> Vec<MovieSummary> {
        self.read().active_list().items.clone()
    }

    pub fn popular(&self) -> Vec<MovieSummary> {
        self.read().popular.items.clone()
    }

    pub fn trending(&self) -> Vec<MovieSummary> {
        self.read().trending.clone()
    }

    pub fn search_results(&self) -> Vec<MovieSummary> {
        self.read().search.results.items.clone()
    }

    pub fn search_query(&self) -> String {
        self.read().search.query.clone()
    }

    pub fn has_more_pages(&self) -> bool {
        self.read().active_list().has_more()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_armed()
    }

    pub fn snapshot(&self) -> MovieStoreSnapshot {
        let state = self.read();
        let list = state.active_list();
        MovieStoreSnapshot {
            mode: state.mode(),
            query: state.search.query.clone(),
            results: list.items.clone(),
            trending: state.trending.clone(),
            favorites: state.favorites.as_slice().to_vec(),
            page: list.page,
            total_pages: list.total_pages,
            has_more_pages: list.has_more(),
            loading: self.in_flight() > 0,
            error: state.error.clone(),
        }
    }

    /// Teardown: drop any pending debounced search
    pub fn shutdown(&self) {
        self.debouncer.shutdown();
        log_info!("Movie store shut down");
    }
}
