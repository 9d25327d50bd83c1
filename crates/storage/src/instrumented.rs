//! Call recording and fault injection.
//!
//! [`InstrumentedLedger`] wraps another ledger, records every call made
//! through it and fails selected calls with [`StorageError::Injected`].
//! Tests use it to check which ledger calls an operation issued and how
//! the handler reports storage failures, including a failure between the
//! two writes of a transfer.

use std::collections::HashSet;

use ledgercc_core::{LedgerAccessor, StorageError, StorageResult};
use parking_lot::Mutex;

/// A call issued against the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCall {
    /// `get(key)`
    Get(String),
    /// `put(key, _)`
    Put(String),
    /// `delete(key)`
    Delete(String),
}

impl LedgerCall {
    /// Key the call was issued for
    pub fn key(&self) -> &str {
        match self {
            LedgerCall::Get(k) | LedgerCall::Put(k) | LedgerCall::Delete(k) => k,
        }
    }

    /// True for puts and deletes
    pub fn is_mutation(&self) -> bool {
        !matches!(self, LedgerCall::Get(_))
    }
}

#[derive(Debug, Default)]
struct FaultPlan {
    get: HashSet<String>,
    put: HashSet<String>,
    delete: HashSet<String>,
    /// Puts allowed to succeed before every later put fails
    put_budget: Option<usize>,
}

#[derive(Debug, Clone)]
struct CallRecord {
    call: LedgerCall,
    ok: bool,
}

/// Ledger wrapper that records calls and injects faults.
///
/// # Example
///
/// ```
/// use ledgercc_core::LedgerAccessor;
/// use ledgercc_storage::{InstrumentedLedger, LedgerCall, MemoryLedger};
///
/// let ledger = InstrumentedLedger::new(MemoryLedger::new());
/// ledger.fail_put("B");
///
/// ledger.put("A", b"1").unwrap();
/// assert!(ledger.put("B", b"2").is_err());
/// assert_eq!(ledger.committed_mutations(), vec![LedgerCall::Put("A".into())]);
/// ```
#[derive(Debug)]
pub struct InstrumentedLedger<L> {
    inner: L,
    calls: Mutex<Vec<CallRecord>>,
    faults: Mutex<FaultPlan>,
}

impl<L: LedgerAccessor> InstrumentedLedger<L> {
    /// Wrap a ledger with no faults configured
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
            faults: Mutex::new(FaultPlan::default()),
        }
    }

    /// The wrapped ledger
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Fail every `get` of `key`
    pub fn fail_get(&self, key: impl Into<String>) {
        self.faults.lock().get.insert(key.into());
    }

    /// Fail every `put` to `key`
    pub fn fail_put(&self, key: impl Into<String>) {
        self.faults.lock().put.insert(key.into());
    }

    /// Fail every `delete` of `key`
    pub fn fail_delete(&self, key: impl Into<String>) {
        self.faults.lock().delete.insert(key.into());
    }

    /// Let `n` more puts succeed, then fail every put after them
    pub fn fail_put_after(&self, n: usize) {
        self.faults.lock().put_budget = Some(n);
    }

    /// Remove all configured faults
    pub fn clear_faults(&self) {
        *self.faults.lock() = FaultPlan::default();
    }

    /// Every call issued so far, in order, including failed ones
    pub fn calls(&self) -> Vec<LedgerCall> {
        self.calls.lock().iter().map(|r| r.call.clone()).collect()
    }

    /// Puts and deletes that reached the wrapped ledger
    pub fn committed_mutations(&self) -> Vec<LedgerCall> {
        self.calls
            .lock()
            .iter()
            .filter(|r| r.ok && r.call.is_mutation())
            .map(|r| r.call.clone())
            .collect()
    }

    /// Forget recorded calls
    pub fn reset_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: LedgerCall, ok: bool) {
        self.calls.lock().push(CallRecord { call, ok });
    }

    fn put_should_fail(&self, key: &str) -> bool {
        let mut faults = self.faults.lock();
        if faults.put.contains(key) {
            return true;
        }
        match faults.put_budget.as_mut() {
            Some(0) => true,
            Some(remaining) => {
                *remaining -= 1;
                false
            }
            None => false,
        }
    }
}

impl<L: LedgerAccessor> LedgerAccessor for InstrumentedLedger<L> {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let call = LedgerCall::Get(key.to_string());
        if self.faults.lock().get.contains(key) {
            self.record(call, false);
            return Err(injected("get", key));
        }
        let result = self.inner.get(key);
        self.record(call, result.is_ok());
        result
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let call = LedgerCall::Put(key.to_string());
        if self.put_should_fail(key) {
            self.record(call, false);
            return Err(injected("put", key));
        }
        let result = self.inner.put(key, value);
        self.record(call, result.is_ok());
        result
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let call = LedgerCall::Delete(key.to_string());
        if self.faults.lock().delete.contains(key) {
            self.record(call, false);
            return Err(injected("delete", key));
        }
        let result = self.inner.delete(key);
        self.record(call, result.is_ok());
        result
    }
}

fn injected(operation: &'static str, key: &str) -> StorageError {
    StorageError::Injected {
        operation,
        key: key.to_string(),
    }
}
