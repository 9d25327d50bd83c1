//! Factor record handlers: storeFactor and getFactor.
//!
//! Records are stored as the caller's bytes. Decoding only finds the
//! address to store under and feeds the logs; a record that does not
//! decode is still stored, under the empty key.

use ledgercc_core::{FactorRecord, LedgerAccessor};
use tracing::{info, warn};

use super::{read_state, SequentialWrites};
use crate::{Output, Result};

/// Handle StoreFactor: persist `record` under its address.
pub fn store_factor<L: LedgerAccessor>(ledger: &L, record: &[u8]) -> Result<Output> {
    let address = match FactorRecord::decode(record) {
        Ok(factor) => {
            info!(
                "Adding {} factor for {} with address {}",
                factor.factor_kind(),
                factor.email,
                factor.address
            );
            factor.address
        }
        Err(e) => {
            warn!("Factor record does not decode ({}), storing under the empty address", e);
            String::new()
        }
    };

    SequentialWrites::new(ledger).put(&address, record)?;
    Ok(Output::Unit)
}

/// Handle GetFactor: return the stored record bytes.
pub fn get_factor<L: LedgerAccessor>(ledger: &L, address: &str) -> Result<Output> {
    info!("Reading factor with address = {}", address);
    let bytes = read_state(ledger, address)?;

    match FactorRecord::decode(&bytes) {
        Ok(factor) => info!(
            "Returning factor for {} with address {}",
            factor.email, factor.address
        ),
        Err(e) => warn!("Stored factor at {} does not decode: {}", address, e),
    }
    Ok(Output::Bytes(bytes))
}
