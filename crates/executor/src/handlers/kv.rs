//! Raw key-value handlers: write, read, delete, query.

use ledgercc_core::{LedgerAccessor, QuerySummary};
use tracing::info;

use super::{read_state, SequentialWrites};
use crate::{Output, Result};

/// Handle Write: overwrite `key` unconditionally.
pub fn write<L: LedgerAccessor>(ledger: &L, key: &str, value: &[u8]) -> Result<Output> {
    info!(
        "Writing key = {}, value = {}",
        key,
        String::from_utf8_lossy(value)
    );
    SequentialWrites::new(ledger).put(key, value)?;
    Ok(Output::Unit)
}

/// Handle Read: return the stored bytes.
pub fn read<L: LedgerAccessor>(ledger: &L, key: &str) -> Result<Output> {
    info!("Reading key = {}", key);
    let value = read_state(ledger, key)?;
    info!("Response: {}", String::from_utf8_lossy(&value));
    Ok(Output::Bytes(value))
}

/// Handle Delete. Deleting an absent key succeeds.
pub fn delete<L: LedgerAccessor>(ledger: &L, key: &str) -> Result<Output> {
    info!("Deleting key = {}", key);
    SequentialWrites::new(ledger).delete(key)?;
    Ok(Output::Unit)
}

/// Handle Query: return the stored balance bytes.
///
/// The `{"Name":..,"Amount":..}` summary is logged, not returned.
pub fn query<L: LedgerAccessor>(ledger: &L, key: &str) -> Result<Output> {
    let value = read_state(ledger, key)?;
    info!("Query Response: {}", QuerySummary::new(key, &value).to_json());
    Ok(Output::Bytes(value))
}
