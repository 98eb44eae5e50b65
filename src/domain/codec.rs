//! Canonical JSON codec for payment records.
//!
//! The encoded form is the persisted ledger state, so it must be
//! reproducible: independent executions that redo the same operation have to
//! write byte-identical values. Records are routed through
//! [`serde_json::Value`], whose object map keeps keys sorted, so the output
//! property order is fixed regardless of struct declaration or platform.

use crate::domain::payment::Payment;
use crate::error::{LedgerError, Result};

/// Encodes a record into its canonical byte form.
pub fn encode(payment: &Payment) -> Result<Vec<u8>> {
    let value = serde_json::to_value(payment)
        .map_err(|e| LedgerError::InternalError(Box::new(e)))?;
    serde_json::to_vec(&value).map_err(|e| LedgerError::InternalError(Box::new(e)))
}

/// Encodes an ordered sequence of records as a canonical JSON array,
/// preserving the given order.
pub fn encode_all(payments: &[Payment]) -> Result<Vec<u8>> {
    let value = serde_json::to_value(payments)
        .map_err(|e| LedgerError::InternalError(Box::new(e)))?;
    serde_json::to_vec(&value).map_err(|e| LedgerError::InternalError(Box::new(e)))
}

/// Decodes canonical bytes back into a record.
///
/// Left inverse of [`encode`]: `decode(encode(r)) == r` for every valid
/// record. Unknown extra properties are tolerated; a missing required field,
/// an ill-typed value or an unparseable timestamp is `MalformedRecord`.
pub fn decode(bytes: &[u8]) -> Result<Payment> {
    serde_json::from_slice(bytes).map_err(|e| LedgerError::MalformedRecord(e.to_string()))
}
