pub mod browse_state;
pub mod favorites;

pub use browse_state::{BrowseMode, MovieStoreSnapshot, SearchState};
pub use favorites::{FavoritesSet, ToggleOutcome};
