//! In-memory versioned ledger
//!
//! DashMap keyed by ledger key, FxHash within each shard.
//!
//! # Design
//!
//! - DashMap: sharded writes, reads take only a shard read lock
//! - Global version: every put and every effective delete takes the next
//!   version, so the version counts state changes
//! - Values are never inspected; the ledger stores raw bytes

use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use ledgercc_core::{LedgerAccessor, StorageResult};
use rustc_hash::FxHasher;

/// A stored value and the version that wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedValue {
    /// Raw stored bytes
    pub value: Vec<u8>,
    /// Ledger version assigned by the write
    pub version: u64,
}

/// In-memory ledger.
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - get(): shard read lock via DashMap
/// - put()/delete(): only lock the key's shard
///
/// # Example
///
/// ```
/// use ledgercc_core::LedgerAccessor;
/// use ledgercc_storage::MemoryLedger;
///
/// let ledger = MemoryLedger::new();
/// ledger.put("a", b"100").unwrap();
/// assert_eq!(ledger.get("a").unwrap(), Some(b"100".to_vec()));
/// assert_eq!(ledger.version(), 1);
/// ```
pub struct MemoryLedger {
    data: DashMap<String, VersionedValue, BuildHasherDefault<FxHasher>>,
    version: AtomicU64,
}

impl MemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            data: DashMap::with_hasher(Default::default()),
            version: AtomicU64::new(0),
        }
    }

    /// Get current version
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Increment version and return new value
    #[inline]
    fn next_version(&self) -> u64 {
        self.version.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Set version (used when restoring a snapshot)
    pub fn set_version(&self, version: u64) {
        self.version.store(version, Ordering::Release);
    }

    /// Value and version for a key
    pub fn get_versioned(&self, key: &str) -> Option<VersionedValue> {
        self.data.get(key).map(|entry| entry.value().clone())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the ledger holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.data.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }

    /// All entries, sorted by key
    ///
    /// NOTE: collect + sort; not for hot paths.
    pub fn entries(&self) -> Vec<(String, VersionedValue)> {
        let mut entries: Vec<_> = self
            .data
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Insert an entry with an explicit version, without bumping the
    /// ledger version. Used when restoring a snapshot.
    pub fn restore_entry(&self, key: String, value: VersionedValue) {
        self.data.insert(key, value);
    }
}

impl LedgerAccessor for MemoryLedger {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.data.get(key).map(|entry| entry.value.clone()))
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let version = self.next_version();
        self.data.insert(
            key.to_string(),
            VersionedValue {
                value: value.to_vec(),
                version,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        if self.data.remove(key).is_some() {
            self.next_version();
        }
        Ok(())
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryLedger")
            .field("version", &self.version())
            .field("entries", &self.len())
            .finish()
    }
}
