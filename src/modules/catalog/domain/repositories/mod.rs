pub mod catalog_repository;

pub use catalog_repository::CatalogRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
