use crate::application::store::PaymentStore;
use crate::domain::payment::Payment;
use crate::error::{LedgerError, Result};
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Whether an operation writes ledger state or only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Submit,
    Evaluate,
}

/// The shape of an operation's result, declared up front so callers can
/// decode responses without probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Nothing,
    Flag,
    Record,
    RecordList,
}

/// One entry of the operation table: the externally invocable name, its
/// intent, its positional input schema and its return shape.
#[derive(Debug)]
pub struct OperationSpec {
    pub name: &'static str,
    pub kind: OperationKind,
    pub params: &'static [&'static str],
    pub returns: ReturnKind,
}

const RECORD_PARAMS: &[&str] = &[
    "paymentID",
    "orderID",
    "paymentDateTime",
    "paymentType",
    "paymentTotal",
    "paymentReceiptURI",
    "paymentReceiptHash",
];

/// Every operation the surface exposes. The table is data, not reflection:
/// it is checked once when the registry is built and drives arity validation
/// on every dispatch.
pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "InitLedger",
        kind: OperationKind::Submit,
        params: &[],
        returns: ReturnKind::Nothing,
    },
    OperationSpec {
        name: "CreatePayment",
        kind: OperationKind::Submit,
        params: RECORD_PARAMS,
        returns: ReturnKind::Record,
    },
    OperationSpec {
        name: "ReadPayment",
        kind: OperationKind::Evaluate,
        params: &["paymentID"],
        returns: ReturnKind::Record,
    },
    OperationSpec {
        name: "UpdatePayment",
        kind: OperationKind::Submit,
        params: RECORD_PARAMS,
        returns: ReturnKind::Record,
    },
    OperationSpec {
        name: "DeletePayment",
        kind: OperationKind::Submit,
        params: &["paymentID"],
        returns: ReturnKind::Nothing,
    },
    OperationSpec {
        name: "PaymentExists",
        kind: OperationKind::Evaluate,
        params: &["paymentID"],
        returns: ReturnKind::Flag,
    },
    OperationSpec {
        name: "GetAllPayments",
        kind: OperationKind::Evaluate,
        params: &[],
        returns: ReturnKind::RecordList,
    },
];

/// What a dispatched operation produced.
#[derive(Debug, PartialEq)]
pub enum Response {
    None,
    Flag(bool),
    Record(Payment),
    Records(Vec<Payment>),
}

/// The operation surface: validates raw invocation parameters against the
/// declared schema and delegates to the record store, letting its typed
/// failures propagate unchanged.
pub struct OperationRegistry {
    store: PaymentStore,
}

impl OperationRegistry {
    /// Builds the registry, verifying the operation table once at startup:
    /// operation names must be unique and no operation may declare the same
    /// parameter twice.
    pub fn new(store: PaymentStore) -> Result<Self> {
        for (i, op) in OPERATIONS.iter().enumerate() {
            if OPERATIONS[..i].iter().any(|prior| prior.name == op.name) {
                return Err(LedgerError::ValidationError(format!(
                    "duplicate operation name {}",
                    op.name
                )));
            }
            for (j, param) in op.params.iter().enumerate() {
                if op.params[..j].contains(param) {
                    return Err(LedgerError::ValidationError(format!(
                        "operation {} declares parameter {} twice",
                        op.name, param
                    )));
                }
            }
        }
        Ok(Self { store })
    }

    /// Looks up the declared spec for an operation name.
    pub fn spec(name: &str) -> Option<&'static OperationSpec> {
        OPERATIONS.iter().find(|op| op.name == name)
    }

    /// Invokes the named operation with positional arguments.
    pub async fn dispatch(&self, name: &str, args: &[String]) -> Result<Response> {
        let spec =
            Self::spec(name).ok_or_else(|| LedgerError::UnknownOperation(name.to_string()))?;

        if args.len() != spec.params.len() {
            return Err(LedgerError::ValidationError(format!(
                "{} expects {} argument(s) ({}), got {}",
                spec.name,
                spec.params.len(),
                spec.params.join(", "),
                args.len()
            )));
        }

        match spec.name {
            "InitLedger" => {
                self.store.init_ledger().await?;
                Ok(Response::None)
            }
            "CreatePayment" => {
                let payment = parse_record(args)?;
                Ok(Response::Record(self.store.create(payment).await?))
            }
            "ReadPayment" => {
                let id = parse_id(&args[0])?;
                Ok(Response::Record(self.store.read(id).await?))
            }
            "UpdatePayment" => {
                let payment = parse_record(args)?;
                Ok(Response::Record(self.store.update(payment).await?))
            }
            "DeletePayment" => {
                let id = parse_id(&args[0])?;
                self.store.delete(id).await?;
                Ok(Response::None)
            }
            "PaymentExists" => {
                let id = parse_id(&args[0])?;
                Ok(Response::Flag(self.store.exists(id).await?))
            }
            "GetAllPayments" => Ok(Response::Records(self.store.list_all().await?)),
            other => Err(LedgerError::UnknownOperation(other.to_string())),
        }
    }
}

fn parse_id(raw: &str) -> Result<&str> {
    if raw.is_empty() {
        return Err(LedgerError::ValidationError(
            "paymentID must not be empty".to_string(),
        ));
    }
    Ok(raw)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).map_err(|e| {
        LedgerError::ValidationError(format!("paymentDateTime {raw:?} is not RFC 3339: {e}"))
    })
}

fn parse_total(raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw).map_err(|e| {
        LedgerError::ValidationError(format!("paymentTotal {raw:?} is not a decimal: {e}"))
    })
}

// Argument order matches RECORD_PARAMS.
fn parse_record(args: &[String]) -> Result<Payment> {
    let paid_at = parse_timestamp(&args[2])?;
    let total = parse_total(&args[4])?;
    Payment::new(
        args[0].as_str(),
        args[1].as_str(),
        paid_at,
        args[3].as_str(),
        total,
        args[5].as_str(),
        args[6].as_str(),
    )
}
