use crate::error::{LedgerError, Result};
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single payment record on the ledger.
///
/// Immutable once constructed: the store replaces whole records under the
/// same id, it never mutates one in place. Equality is field-wise over every
/// attribute. The serde names are the canonical JSON property names the
/// record is persisted under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "paymentID")]
    payment_id: String,
    #[serde(rename = "orderID")]
    order_id: String,
    #[serde(rename = "paymentType")]
    payment_type: String,
    #[serde(rename = "paymentReceiptURI")]
    receipt_uri: String,
    #[serde(rename = "paymentReceiptHash")]
    receipt_hash: String,
    #[serde(rename = "paymentDateTime")]
    paid_at: DateTime<FixedOffset>,
    #[serde(rename = "paymentTotal")]
    total: Decimal,
}

impl Payment {
    /// Builds a payment record. The id doubles as the ledger key and must be
    /// non-empty; every other field is opaque to this crate.
    pub fn new(
        payment_id: impl Into<String>,
        order_id: impl Into<String>,
        paid_at: DateTime<FixedOffset>,
        payment_type: impl Into<String>,
        total: Decimal,
        receipt_uri: impl Into<String>,
        receipt_hash: impl Into<String>,
    ) -> Result<Self> {
        let payment_id = payment_id.into();
        if payment_id.is_empty() {
            return Err(LedgerError::ValidationError(
                "payment id must not be empty".to_string(),
            ));
        }

        Ok(Self {
            payment_id,
            order_id: order_id.into(),
            payment_type: payment_type.into(),
            receipt_uri: receipt_uri.into(),
            receipt_hash: receipt_hash.into(),
            paid_at,
            total,
        })
    }

    pub fn payment_id(&self) -> &str {
        &self.payment_id
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn payment_type(&self) -> &str {
        &self.payment_type
    }

    pub fn receipt_uri(&self) -> &str {
        &self.receipt_uri
    }

    pub fn receipt_hash(&self) -> &str {
        &self.receipt_hash
    }

    pub fn paid_at(&self) -> DateTime<FixedOffset> {
        self.paid_at
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn timestamp(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn sample(id: &str) -> Payment {
        Payment::new(
            id,
            "ordine1",
            timestamp("1996-10-20T12:30:00+00:00"),
            "Carta",
            dec!(30.0),
            "http://x",
            "de",
        )
        .unwrap()
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = Payment::new(
            "",
            "ordine1",
            timestamp("1996-10-20T12:30:00+00:00"),
            "Carta",
            dec!(30.0),
            "http://x",
            "de",
        );
        assert!(matches!(result, Err(LedgerError::ValidationError(_))));
    }

    #[test]
    fn test_equality_covers_every_field() {
        let base = sample("payment1");
        assert_eq!(base, sample("payment1"));

        // paymentType participates in equality like every other field
        let other_type = Payment::new(
            "payment1",
            "ordine1",
            timestamp("1996-10-20T12:30:00+00:00"),
            "Contanti",
            dec!(30.0),
            "http://x",
            "de",
        )
        .unwrap();
        assert_ne!(base, other_type);

        let other_total = Payment::new(
            "payment1",
            "ordine1",
            timestamp("1996-10-20T12:30:00+00:00"),
            "Carta",
            dec!(31.0),
            "http://x",
            "de",
        )
        .unwrap();
        assert_ne!(base, other_total);

        let other_time = Payment::new(
            "payment1",
            "ordine1",
            timestamp("1996-10-20T12:31:00+00:00"),
            "Carta",
            dec!(30.0),
            "http://x",
            "de",
        )
        .unwrap();
        assert_ne!(base, other_time);
    }

    #[test]
    fn test_negative_total_allowed() {
        let refund = Payment::new(
            "refund1",
            "ordine1",
            timestamp("1996-10-20T12:30:00+00:00"),
            "Storno",
            dec!(-30.0),
            "http://x",
            "de",
        );
        assert!(refund.is_ok());
        assert_eq!(refund.unwrap().total(), dec!(-30.0));
    }
}
