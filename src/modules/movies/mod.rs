// Movies bounded context: browse lists, debounced search and favorites
pub mod application;
pub mod domain;

pub use application::MovieStore;
pub use domain::{BrowseMode, FavoritesSet, MovieStoreSnapshot, SearchState, ToggleOutcome};
