use crate::domain::ports::StateStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory state store.
///
/// Backed by a `BTreeMap` so range scans come out in ascending key order,
/// matching the ordering contract of the external collaborator. `Clone`
/// shares the underlying map, which lets tests hold a second handle onto the
/// same state. Default backend when no persistent path is configured.
#[derive(Default, Clone)]
pub struct InMemoryStateStore {
    entries: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl InMemoryStateStore {
    /// Creates a new, empty in-memory state store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn scan_range(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>> {
        let entries = self.entries.read().await;
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start)
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end)
        };

        Ok(entries
            .range::<str, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_delete() {
        let store = InMemoryStateStore::new();

        store.put("a", b"one".to_vec()).await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some(b"one".to_vec()));

        store.put("a", b"two".to_vec()).await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some(b"two".to_vec()));

        store.delete("a").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);

        // Deleting an absent key is not an error at this layer.
        store.delete("a").await.unwrap();
    }

    #[tokio::test]
    async fn test_scan_open_bounds_ascending() {
        let store = InMemoryStateStore::new();
        for key in ["b", "a", "c"] {
            store.put(key, key.as_bytes().to_vec()).await.unwrap();
        }

        let entries = store.scan_range("", "").await.unwrap();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_scan_half_open_range() {
        let store = InMemoryStateStore::new();
        for key in ["payment1", "payment2", "payment3"] {
            store.put(key, Vec::new()).await.unwrap();
        }

        // Start inclusive, end exclusive.
        let entries = store.scan_range("payment1", "payment3").await.unwrap();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["payment1", "payment2"]);
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let store = InMemoryStateStore::new();
        let handle = store.clone();

        store.put("a", b"one".to_vec()).await.unwrap();
        assert_eq!(handle.get("a").await.unwrap(), Some(b"one".to_vec()));
    }
}
