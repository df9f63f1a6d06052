pub mod persistence_adapter;

pub use persistence_adapter::PersistenceAdapter;
