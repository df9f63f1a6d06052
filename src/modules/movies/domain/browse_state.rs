use crate::modules::catalog::MovieSummary;
use crate::shared::application::{Page, PagedList};
use serde::Serialize;

/// Which list the browse view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowseMode {
    Popular,
    Search,
}

impl BrowseMode {
    /// Pure function of the live query: any non-blank query means search
    pub fn for_query(query: &str) -> Self {
        if query.trim().is_empty() {
            BrowseMode::Popular
        } else {
            BrowseMode::Search
        }
    }
}

/// Transient search state, rebuilt for every query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    /// Live query as typed
    pub query: String,
    pub results: PagedList<MovieSummary>,
    /// Trimmed query that produced `results`; lags `query` while a search is pending
    pub results_query: String,
}

impl SearchState {
    pub fn show_results(&mut self, query: &str, page: Page<MovieSummary>) {
        self.results.replace(page);
        self.results_query = query.to_string();
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
        self.results_query.clear();
    }

    /// True when `results` were produced by the live query
    pub fn results_are_current(&self) -> bool {
        self.results_query == self.query.trim()
    }
}

/// Read model handed to the view layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieStoreSnapshot {
    pub mode: BrowseMode,
    pub query: String,
    pub results: Vec<MovieSummary>,
    pub trending: Vec<MovieSummary>,
    pub favorites: Vec<MovieSummary>,
    pub page: u32,
    pub total_pages: u32,
    pub has_more_pages: bool,
    pub loading: bool,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_for_query() {
        assert_eq!(BrowseMode::for_query(""), BrowseMode::Popular);
        assert_eq!(BrowseMode::for_query("  \t"), BrowseMode::Popular);
        assert_eq!(BrowseMode::for_query("alien"), BrowseMode::Search);
    }

    #[test]
    fn test_results_track_the_query_that_produced_them() {
        let mut search = SearchState {
            query: " alien ".to_string(),
            ..SearchState::default()
        };
        search.show_results("alien", Page::new(vec![MovieSummary::new(348, "Alien")], 1, 2, 30));
        assert!(search.results_are_current());

        search.query = "aliens".to_string();
        assert!(!search.results_are_current());

        search.clear_results();
        assert!(search.results.items.is_empty());
        assert_eq!(search.results_query, "");
    }
}
