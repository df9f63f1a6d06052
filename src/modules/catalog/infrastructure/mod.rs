pub mod http_client;
pub mod tmdb;

pub use http_client::CatalogHttpClient;
pub use tmdb::TmdbAdapter;
