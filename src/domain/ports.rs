use crate::error::Result;
use async_trait::async_trait;

/// The external ordered key-value collaborator this crate stores records in.
///
/// The collaborator owns durability and concurrency control: conflicting
/// writes to the same key are serialized or rejected at commit time, which
/// is what makes the create-time existence probe sound. `scan_range` yields
/// entries in ascending lexicographic key order; an empty bound is open on
/// that side, so `scan_range("", "")` walks the whole key space. The end
/// bound is exclusive.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
    async fn scan_range(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>>;
}

pub type StateStoreBox = Box<dyn StateStore>;
