use crate::shared::errors::AppResult;

/// Durable string key-value storage
///
/// Backends report failures as `StorageError`; deciding what to do about
/// them is up to the caller.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Removing an absent key succeeds
    fn remove(&self, key: &str) -> AppResult<()>;
}
