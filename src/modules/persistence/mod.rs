// Persistence bounded context: durable key-value storage for UI state
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::PersistenceAdapter;
pub use domain::{KeyValueStore, StorageKey};
pub use infrastructure::{FileStore, MemoryStore};
