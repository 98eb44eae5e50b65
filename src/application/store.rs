use crate::domain::codec;
use crate::domain::payment::Payment;
use crate::domain::ports::StateStoreBox;
use crate::error::{LedgerError, Result};
use chrono::DateTime;
use rust_decimal::Decimal;

/// Record store for payments.
///
/// Each method is one self-contained unit of work against the external
/// key-value collaborator: an existence probe plus a write, a single
/// read/delete, or one range scan. A given id is either `Absent` or
/// `Present`; `create` moves it to `Present`, `delete` back to `Absent`,
/// `update` requires and preserves `Present`.
pub struct PaymentStore {
    state: StateStoreBox,
}

impl PaymentStore {
    pub fn new(state: StateStoreBox) -> Self {
        Self { state }
    }

    /// Stores a new record under its id.
    ///
    /// Fails with `AlreadyExists` if the id is already present; uniqueness
    /// under concurrent creates relies on the collaborator serializing
    /// conflicting writes to the same key.
    pub async fn create(&self, payment: Payment) -> Result<Payment> {
        if self.exists(payment.payment_id()).await? {
            return Err(LedgerError::AlreadyExists(payment.payment_id().to_string()));
        }

        let encoded = codec::encode(&payment)?;
        self.state.put(payment.payment_id(), encoded).await?;
        Ok(payment)
    }

    /// Fetches and decodes the record stored under `id`.
    pub async fn read(&self, id: &str) -> Result<Payment> {
        match self.state.get(id).await? {
            Some(bytes) if !bytes.is_empty() => codec::decode(&bytes),
            _ => Err(LedgerError::NotFound(id.to_string())),
        }
    }

    /// Replaces the record stored under the payment's id with this one.
    ///
    /// Whole-record replacement: the previous value is discarded, never
    /// merged. Fails with `NotFound` if the id is absent.
    pub async fn update(&self, payment: Payment) -> Result<Payment> {
        if !self.exists(payment.payment_id()).await? {
            return Err(LedgerError::NotFound(payment.payment_id().to_string()));
        }

        let encoded = codec::encode(&payment)?;
        self.state.put(payment.payment_id(), encoded).await?;
        Ok(payment)
    }

    /// Removes the record stored under `id`, failing with `NotFound` if it
    /// is absent.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.exists(id).await? {
            return Err(LedgerError::NotFound(id.to_string()));
        }

        self.state.delete(id).await
    }

    /// True iff a non-empty value is stored under `id`. Absence is a valid
    /// answer, not an error.
    pub async fn exists(&self, id: &str) -> Result<bool> {
        Ok(self
            .state
            .get(id)
            .await?
            .is_some_and(|bytes| !bytes.is_empty()))
    }

    /// Decodes every record on the ledger, in ascending key order.
    ///
    /// One full range scan with open bounds; the scan order comes from the
    /// collaborator and is returned as-is, never re-sorted. A decode failure
    /// on any entry aborts the whole listing — no partial results.
    pub async fn list_all(&self) -> Result<Vec<Payment>> {
        let entries = self.state.scan_range("", "").await?;
        entries
            .iter()
            .map(|(_, bytes)| codec::decode(bytes))
            .collect()
    }

    /// Seeds the ledger with the fixed sample records.
    pub async fn init_ledger(&self) -> Result<()> {
        for payment in sample_payments()? {
            self.create(payment).await?;
        }
        Ok(())
    }
}

fn sample_payments() -> Result<Vec<Payment>> {
    let paid_at = DateTime::parse_from_rfc3339("1996-10-20T12:30:00+00:00")
        .map_err(|e| LedgerError::InternalError(Box::new(e)))?;

    Ok(vec![
        Payment::new(
            "payment1",
            "ordine1",
            paid_at,
            "Carta",
            Decimal::new(300, 1),
            "http://www.google.com",
            "de",
        )?,
        Payment::new(
            "payment2",
            "ordine1",
            paid_at,
            "Contanti",
            Decimal::new(500, 1),
            "http://www.google.com",
            "de",
        )?,
    ])
}
