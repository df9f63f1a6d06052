pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::CatalogRepository;
pub use value_objects::{ImageSize, ImageUrlBuilder};
