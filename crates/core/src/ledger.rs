//! The ledger accessor contract.
//!
//! A ledger stores opaque byte values under string keys. Each call is
//! atomic and its effect is visible to every later call made by the same
//! invocation. Ordering between concurrent invocations is the ledger's
//! concern; the transition handler takes no locks.

use std::sync::Arc;

use crate::error::StorageResult;

/// Key-value access to the world state.
///
/// Implementations take `&self` so a ledger can be shared behind an `Arc`
/// or a reference; interior mutability is up to the implementation.
pub trait LedgerAccessor {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key does not exist.
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, creating or overwriting it.
    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> StorageResult<()>;
}

impl<L: LedgerAccessor + ?Sized> LedgerAccessor for &L {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        (**self).delete(key)
    }
}

impl<L: LedgerAccessor + ?Sized> LedgerAccessor for Arc<L> {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        (**self).delete(key)
    }
}

impl<L: LedgerAccessor + ?Sized> LedgerAccessor for Box<L> {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        (**self).delete(key)
    }
}
