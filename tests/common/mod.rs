use payment_ledger::application::registry::OperationRegistry;
use payment_ledger::application::store::PaymentStore;
use payment_ledger::infrastructure::in_memory::InMemoryStateStore;

pub fn registry() -> OperationRegistry {
    registry_over(InMemoryStateStore::new())
}

pub fn registry_over(state: InMemoryStateStore) -> OperationRegistry {
    OperationRegistry::new(PaymentStore::new(Box::new(state))).expect("operation table is valid")
}

pub fn record_args(id: &str, order_id: &str, total: &str) -> Vec<String> {
    vec![
        id.to_string(),
        order_id.to_string(),
        "1996-10-20T12:30:00+00:00".to_string(),
        "Carta".to_string(),
        total.to_string(),
        "http://x".to_string(),
        "de".to_string(),
    ]
}
