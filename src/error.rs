use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// The closed set of failures a ledger operation can report.
///
/// `AlreadyExists`, `NotFound` and `MalformedRecord` are the record-level
/// failures callers are expected to match on; the remaining variants carry
/// boundary validation and collaborator failures through unchanged. Nothing
/// is retried or swallowed at this layer.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("payment {0} already exists")]
    AlreadyExists(String),
    #[error("payment {0} does not exist")]
    NotFound(String),
    #[error("malformed payment record: {0}")]
    MalformedRecord(String),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("storage error: {0}")]
    StorageError(#[from] rocksdb::Error),
    #[error("internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}
