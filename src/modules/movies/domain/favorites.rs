use crate::modules::catalog::MovieSummary;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Saved movies, unique by id, in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FavoritesSet {
    movies: Vec<MovieSummary>,
}

/// Outcome of a toggle, so callers can report what happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a possibly untrusted list; later duplicates of an id are dropped
    pub fn from_movies(movies: Vec<MovieSummary>) -> Self {
        let mut seen = HashSet::with_capacity(movies.len());
        let movies = movies.into_iter().filter(|m| seen.insert(m.id)).collect();
        Self { movies }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.movies.iter().any(|m| m.id == id)
    }

    /// Append unless already present; returns whether the set changed
    pub fn add(&mut self, movie: MovieSummary) -> bool {
        if self.contains(movie.id) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    /// Returns whether the set changed
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != id);
        self.movies.len() < before
    }

    pub fn toggle(&mut self, movie: MovieSummary) -> ToggleOutcome {
        if self.remove(movie.id) {
            ToggleOutcome::Removed
        } else {
            self.movies.push(movie);
            ToggleOutcome::Added
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieSummary> {
        self.movies.iter()
    }

    pub fn as_slice(&self) -> &[MovieSummary] {
        &self.movies
    }

    pub fn ids(&self) -> Vec<u64> {
        self.movies.iter().map(|m| m.id).collect()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl<'de> Deserialize<'de> for FavoritesSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<MovieSummary>::deserialize(deserializer).map(Self::from_movies)
    }
}
