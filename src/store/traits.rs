//! List store trait definition

use super::errors::StoreResult;

/// Trait defining the list operations of a key-value store
///
/// Mirrors the Redis commands LRANGE 0 -1, RPUSH, DEL and PING.
pub trait ListStore: Send + Sync {
    /// Read every element of the list at `key`, head to tail
    ///
    /// A missing key reads as an empty list.
    fn range_all(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = StoreResult<Vec<String>>> + Send;

    /// Append `values` to the tail of the list at `key`, in order
    fn push(
        &self,
        key: &str,
        values: &[String],
    ) -> impl std::future::Future<Output = StoreResult<()>> + Send;

    /// Remove the key entirely
    fn delete(&self, key: &str) -> impl std::future::Future<Output = StoreResult<()>> + Send;

    /// Check that the backend answers
    fn ping(&self) -> impl std::future::Future<Output = StoreResult<bool>> + Send;

    /// Get the name of the store provider
    fn provider_name(&self) -> &'static str;
}
