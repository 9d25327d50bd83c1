//! JSON snapshot of a [`MemoryLedger`].
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": 3,
//!   "entries": {
//!     "A": { "value": "OTA=", "version": 3 },
//!     "B": { "value": "MjEw", "version": 2 }
//!   }
//! }
//! ```
//!
//! Values are base64 so arbitrary bytes survive the JSON encoding.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::memory::{MemoryLedger, VersionedValue};

/// Snapshot load/save failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The file is not a valid snapshot document
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored value is not valid base64
    #[error("malformed value for key {key:?}: {source}")]
    Base64 {
        /// Key whose value failed to decode
        key: String,
        /// Underlying error
        #[source]
        source: base64::DecodeError,
    },
}

/// One stored entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Base64 of the stored bytes
    pub value: String,
    /// Version that wrote the value
    pub version: u64,
}

/// Serializable image of a ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Ledger version at capture time
    pub version: u64,
    /// Entries by key
    pub entries: BTreeMap<String, SnapshotEntry>,
}

impl LedgerSnapshot {
    /// Capture the current contents of a ledger.
    pub fn capture(ledger: &MemoryLedger) -> Self {
        let entries = ledger
            .entries()
            .into_iter()
            .map(|(key, v)| {
                (
                    key,
                    SnapshotEntry {
                        value: STANDARD.encode(&v.value),
                        version: v.version,
                    },
                )
            })
            .collect();
        Self {
            version: ledger.version(),
            entries,
        }
    }

    /// Rebuild a ledger from this snapshot.
    pub fn restore(&self) -> Result<MemoryLedger, SnapshotError> {
        let ledger = MemoryLedger::new();
        for (key, entry) in &self.entries {
            let value = STANDARD
                .decode(&entry.value)
                .map_err(|source| SnapshotError::Base64 {
                    key: key.clone(),
                    source,
                })?;
            ledger.restore_entry(
                key.clone(),
                VersionedValue {
                    value,
                    version: entry.version,
                },
            );
        }
        ledger.set_version(self.version);
        Ok(ledger)
    }

    /// Load a snapshot file. A missing file is an empty snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) => {
                let snapshot: Self = serde_json::from_slice(&bytes)?;
                debug!(
                    "Loaded snapshot {} at version {} ({} entries)",
                    path.display(),
                    snapshot.version,
                    snapshot.entries.len()
                );
                Ok(snapshot)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No snapshot at {}, starting empty", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Write the snapshot to `path`.
    ///
    /// The document is written to a sibling `.tmp` file first and renamed
    /// over the target, so a reader never sees a half-written snapshot.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let tmp = tmp_path(path);
        let bytes = serde_json::to_vec_pretty(self)?;
        fs::write(&tmp, bytes).map_err(|source| SnapshotError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved snapshot {} at version {}", path.display(), self.version);
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
