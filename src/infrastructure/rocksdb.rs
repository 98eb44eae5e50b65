use crate::domain::ports::StateStore;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Direction, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding the payment records.
pub const CF_PAYMENTS: &str = "payments";

/// A persistent state store implementation using RocksDB.
///
/// Keys live in a dedicated column family; RocksDB iterates it in ascending
/// byte order, which for the UTF-8 keys this crate writes is exactly the
/// lexicographic scan order the collaborator contract requires.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbStateStore {
    db: Arc<DB>,
}

impl RocksDbStateStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the payments column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_payments = ColumnFamilyDescriptor::new(CF_PAYMENTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_payments])?;

        Ok(Self { db: Arc::new(db) })
    }
}

#[async_trait]
impl StateStore for RocksDbStateStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let cf = self.db.cf_handle(CF_PAYMENTS).ok_or_else(|| {
            LedgerError::InternalError(Box::new(std::io::Error::other(
                "Payments column family not found",
            )))
        })?;

        Ok(self.db.get_cf(&cf, key)?)
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let cf = self.db.cf_handle(CF_PAYMENTS).ok_or_else(|| {
            LedgerError::InternalError(Box::new(std::io::Error::other(
                "Payments column family not found",
            )))
        })?;

        self.db.put_cf(&cf, key, value)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let cf = self.db.cf_handle(CF_PAYMENTS).ok_or_else(|| {
            LedgerError::InternalError(Box::new(std::io::Error::other(
                "Payments column family not found",
            )))
        })?;

        self.db.delete_cf(&cf, key)?;
        Ok(())
    }

    async fn scan_range(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>> {
        let cf = self.db.cf_handle(CF_PAYMENTS).ok_or_else(|| {
            LedgerError::InternalError(Box::new(std::io::Error::other(
                "Payments column family not found",
            )))
        })?;

        let mode = if start.is_empty() {
            IteratorMode::Start
        } else {
            IteratorMode::From(start.as_bytes(), Direction::Forward)
        };

        let mut entries = Vec::new();
        for item in self.db.iterator_cf(&cf, mode) {
            let (key, value) = item?;
            let key = String::from_utf8(key.to_vec())
                .map_err(|e| LedgerError::InternalError(Box::new(e)))?;
            // End bound is exclusive; an empty end means scan to the tail.
            if !end.is_empty() && key.as_str() >= end {
                break;
            }
            entries.push((key, value.to_vec()));
        }

        Ok(entries)
    }
}
