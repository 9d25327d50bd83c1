//! Command handlers.
//!
//! One function per operation. Handlers take the ledger and the command's
//! arguments and return an [`Output`](crate::Output). They share the read
//! and write helpers below so every ledger failure is reported with the
//! key involved.

pub(crate) mod balance;
pub(crate) mod factor;
pub(crate) mod kv;

use ledgercc_core::LedgerAccessor;

use crate::{Error, Result};

/// Read `key`, failing with `EntityNotFound` if it is absent.
pub(crate) fn read_state<L: LedgerAccessor>(ledger: &L, key: &str) -> Result<Vec<u8>> {
    ledger
        .get(key)
        .map_err(|source| Error::LedgerRead {
            key: key.to_string(),
            source,
        })?
        .ok_or_else(|| Error::EntityNotFound {
            key: key.to_string(),
        })
}

/// Sequential writes of one invocation.
///
/// There is no rollback: when a write fails, the error carries the keys
/// that were already written so the caller can tell a partial update from
/// a clean failure.
pub(crate) struct SequentialWrites<'a, L> {
    ledger: &'a L,
    committed: Vec<String>,
}

impl<'a, L: LedgerAccessor> SequentialWrites<'a, L> {
    pub(crate) fn new(ledger: &'a L) -> Self {
        Self {
            ledger,
            committed: Vec::new(),
        }
    }

    pub(crate) fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
        match self.ledger.put(key, value) {
            Ok(()) => {
                self.committed.push(key.to_string());
                Ok(())
            }
            Err(source) => Err(Error::LedgerWrite {
                key: key.to_string(),
                committed: std::mem::take(&mut self.committed),
                source,
            }),
        }
    }

    pub(crate) fn delete(&mut self, key: &str) -> Result<()> {
        match self.ledger.delete(key) {
            Ok(()) => {
                self.committed.push(key.to_string());
                Ok(())
            }
            Err(source) => Err(Error::LedgerWrite {
                key: key.to_string(),
                committed: std::mem::take(&mut self.committed),
                source,
            }),
        }
    }
}
