//! Typed facade over the executor.
//!
//! Each method builds the matching [`Command`], executes it and extracts
//! the typed result. Semantics are exactly those of
//! [`Executor::apply`]: the facade adds types, not behavior.

use ledgercc_core::{parse_stored_amount, FactorRecord, LedgerAccessor, QuerySummary};
use ledgercc_executor::{Command, Executor, ExecutorOptions, Output};
use ledgercc_storage::MemoryLedger;
use tracing::Dispatch;

use crate::error::{Error, Result};

/// Typed handle on a ledger.
///
/// # Example
///
/// ```
/// use ledgercc::prelude::*;
///
/// let cc = Chaincode::ephemeral();
/// let record = FactorRecord::new("0xabc", "alice@example.com", "key", vec!["pk".into()]);
/// cc.store_factor_record(&record)?;
///
/// assert_eq!(cc.get_factor_record("0xabc")?, Some(record));
/// # Ok::<(), ledgercc::Error>(())
/// ```
pub struct Chaincode<L> {
    executor: Executor<L>,
}

impl Chaincode<MemoryLedger> {
    /// Create a handle over a fresh in-memory ledger.
    pub fn ephemeral() -> Self {
        Self::new(MemoryLedger::new())
    }
}

impl<L: LedgerAccessor> Chaincode<L> {
    /// Create a handle over `ledger` with default options.
    pub fn new(ledger: L) -> Self {
        Self {
            executor: Executor::new(ledger),
        }
    }

    /// Create a handle with explicit executor options.
    pub fn with_options(ledger: L, options: ExecutorOptions) -> Self {
        Self {
            executor: Executor::with_options(ledger, options),
        }
    }

    /// Wrap an existing executor.
    pub fn from_executor(executor: Executor<L>) -> Self {
        Self { executor }
    }

    /// Send logs to `dispatch`.
    pub fn with_dispatch(self, dispatch: Dispatch) -> Self {
        Self {
            executor: self.executor.with_dispatch(dispatch),
        }
    }

    /// Get the underlying executor.
    pub fn executor(&self) -> &Executor<L> {
        &self.executor
    }

    /// Get the underlying ledger.
    pub fn ledger(&self) -> &L {
        self.executor.ledger()
    }

    // =========================================================================
    // Balances
    // =========================================================================

    /// Seed two balances.
    pub fn init(&self, a: &str, a_amount: i64, b: &str, b_amount: i64) -> Result<()> {
        self.executor.execute(Command::Init {
            a: a.to_string(),
            a_amount: a_amount.to_string(),
            b: b.to_string(),
            b_amount: b_amount.to_string(),
        })?;
        Ok(())
    }

    /// Transfer `amount` from `from` to `to`. Balances may go negative.
    pub fn transfer(&self, from: &str, to: &str, amount: i64) -> Result<()> {
        self.executor.execute(Command::Move {
            from: from.to_string(),
            to: to.to_string(),
            amount: amount.to_string(),
        })?;
        Ok(())
    }

    /// Stored bytes of a balance.
    pub fn query(&self, key: &str) -> Result<Vec<u8>> {
        self.bytes(
            Command::Query {
                key: key.to_string(),
            },
            "Query",
        )
    }

    /// A balance, parsed.
    pub fn balance(&self, key: &str) -> Result<i64> {
        let bytes = self.query(key)?;
        parse_stored_amount(&bytes).map_err(|e| {
            Error::Executor(ledgercc_executor::Error::InvalidAmount {
                subject: format!("stored balance of {}", key),
                value: e.value,
            })
        })
    }

    /// The `{"Name":..,"Amount":..}` summary of a balance.
    pub fn query_summary(&self, key: &str) -> Result<QuerySummary> {
        let bytes = self.query(key)?;
        Ok(QuerySummary::new(key, &bytes))
    }

    // =========================================================================
    // Raw key-value
    // =========================================================================

    /// Overwrite `key` with `value`.
    pub fn write(&self, key: &str, value: impl AsRef<[u8]>) -> Result<()> {
        self.executor.execute(Command::Write {
            key: key.to_string(),
            value: value.as_ref().to_vec(),
        })?;
        Ok(())
    }

    /// Stored bytes at `key`.
    pub fn read(&self, key: &str) -> Result<Vec<u8>> {
        self.bytes(
            Command::Read {
                key: key.to_string(),
            },
            "Read",
        )
    }

    /// Remove `key`. Removing an absent key succeeds.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.executor.execute(Command::Delete {
            key: key.to_string(),
        })?;
        Ok(())
    }

    // =========================================================================
    // Factor records
    // =========================================================================

    /// Store serialized record bytes under the record's address.
    ///
    /// Bytes that do not decode are stored under the empty address.
    pub fn store_factor(&self, record: impl AsRef<[u8]>) -> Result<()> {
        self.executor.execute(Command::StoreFactor {
            record: record.as_ref().to_vec(),
        })?;
        Ok(())
    }

    /// Serialize and store a record.
    pub fn store_factor_record(&self, record: &FactorRecord) -> Result<()> {
        self.store_factor(record.to_bytes()?)
    }

    /// Stored record bytes at `address`.
    pub fn get_factor(&self, address: &str) -> Result<Vec<u8>> {
        self.bytes(
            Command::GetFactor {
                address: address.to_string(),
            },
            "GetFactor",
        )
    }

    /// Stored record at `address`, or `None` if the bytes do not decode.
    pub fn get_factor_record(&self, address: &str) -> Result<Option<FactorRecord>> {
        let bytes = self.get_factor(address)?;
        Ok(FactorRecord::decode(&bytes).ok())
    }

    fn bytes(&self, cmd: Command, name: &str) -> Result<Vec<u8>> {
        match self.executor.execute(cmd)? {
            Output::Bytes(bytes) => Ok(bytes),
            Output::Unit => Err(Error::Internal(format!("Unexpected output for {}", name))),
        }
    }
}

impl<L> std::fmt::Debug for Chaincode<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chaincode")
            .field("executor", &self.executor)
            .finish()
    }
}
