use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_ledger::application::registry::OperationRegistry;
use payment_ledger::application::store::PaymentStore;
use payment_ledger::domain::ports::StateStoreBox;
use payment_ledger::infrastructure::in_memory::InMemoryStateStore;
use payment_ledger::interfaces::json::response_writer::ResponseWriter;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Operation to invoke, e.g. CreatePayment or GetAllPayments
    operation: String,

    /// Positional arguments for the operation, in its declared order
    args: Vec<String>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let state: StateStoreBox = match cli.db_path {
        Some(db_path) => open_persistent(db_path)?,
        None => Box::new(InMemoryStateStore::new()),
    };

    let registry = OperationRegistry::new(PaymentStore::new(state)).into_diagnostic()?;
    let response = registry
        .dispatch(&cli.operation, &cli.args)
        .await
        .into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());
    writer.write_response(&response).into_diagnostic()?;

    Ok(())
}

#[cfg(feature = "storage-rocksdb")]
fn open_persistent(db_path: PathBuf) -> Result<StateStoreBox> {
    use payment_ledger::infrastructure::rocksdb::RocksDbStateStore;

    let store = RocksDbStateStore::open(db_path).into_diagnostic()?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_persistent(_db_path: PathBuf) -> Result<StateStoreBox> {
    eprintln!(
        "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
    );
    Ok(Box::new(InMemoryStateStore::new()))
}
