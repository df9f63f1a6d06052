// Catalog bounded context: remote movie metadata, search and media
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{MovieDetailView, MovieDetailsService};
pub use domain::{
    CatalogRepository, Genre, ImageSize, ImageUrlBuilder, MovieDetails, MovieSummary, Video,
};
pub use infrastructure::{CatalogHttpClient, TmdbAdapter};
