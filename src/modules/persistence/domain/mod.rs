pub mod key_value_store;
pub mod storage_key;

pub use key_value_store::KeyValueStore;
pub use storage_key::StorageKey;
