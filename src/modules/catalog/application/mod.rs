pub mod details_service;

pub use details_service::{MovieDetailView, MovieDetailsService};
